use leptos::{ev, *};

use campsite_core::{
    entities::{comment::NewComment, id::Id, rating::RatingValue},
    form::{self, Field},
};

/// Button that opens a modal dialog to submit a new comment.
#[component]
pub fn CommentForm<F>(campsite_id: Id, add_comment: F) -> impl IntoView
where
    F: Fn(Id, RatingValue, String, String) + 'static + Copy,
{
    // -- signals -- //

    let state = RwSignal::new(form::CommentForm::new());
    let is_open = Signal::derive(move || state.with(form::CommentForm::is_open));
    let campsite_id = StoredValue::new(campsite_id);

    // -- callbacks -- //

    let toggle_modal = move || state.update(form::CommentForm::toggle);
    let dismiss_modal = move || state.update(form::CommentForm::dismiss);

    let on_input = move |field: Field, ev: ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.set_value(field, &value));
    };

    let on_blur = move |field: Field| state.update(|s| s.touch(field));

    // -- effects -- //

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if is_open.get_untracked() {
            let key = ev.key();
            state.update(|s| s.dismiss_on_key(&key));
        }
    });
    on_cleanup(move || escape_listener.remove());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let result = state.try_update(|s| campsite_id.with_value(|id| s.submit(id)));
        match result {
            Some(Ok(new_comment)) => {
                let NewComment {
                    campsite_id,
                    rating,
                    author,
                    text,
                } = new_comment;
                add_comment(campsite_id, rating, author, text);
            }
            Some(Err(err)) => {
                log::debug!("Comment not submitted: {err}");
            }
            None => {
                log::warn!("Comment form has been disposed");
            }
        }
    };

    view! {
      <div>
        <button
          type="button"
          class="btn btn-outline-secondary"
          on:click = move |_| toggle_modal()
        >
          <i class="fa fa-pencil fa-lg" />
          " Submit Comment"
        </button>

        <Show when = move || is_open.get()>
          <div class="modal-backdrop fade show"></div>
          <div
            class="modal fade show d-block"
            tabindex="-1"
            role="dialog"
            aria-modal="true"
            // Clicks outside of the dialog close the modal.
            on:click = move |ev: ev::MouseEvent| {
              if ev.target() == ev.current_target() {
                dismiss_modal();
              }
            }
          >
            <div class="modal-dialog" role="document">
              <div class="modal-content">
                <div class="modal-header">
                  <h5 class="modal-title">"Submit Comment"</h5>
                  <button
                    type="button"
                    class="close"
                    aria-label="Close"
                    on:click = move |_| dismiss_modal()
                  >
                    <span aria-hidden="true">"×"</span>
                  </button>
                </div>
                <div class="modal-body">
                  <form on:submit = on_submit>
                    <div class="form-group row">
                      <label for="rating" class="col-md-2 col-form-label">"Rating"</label>
                      <div class="col-md-10">
                        <select
                          id="rating"
                          name=Field::Rating.name()
                          class="form-control"
                          prop:value = move || state.with(|s| s.draft().rating.to_string())
                          on:change = move |ev| on_input(Field::Rating, ev)
                        >
                          {
                            RatingValue::all()
                              .map(|rating| view! {
                                <option value=rating.to_string()>{ rating.to_string() }</option>
                              })
                              .collect_view()
                          }
                        </select>
                      </div>
                    </div>
                    <div class="form-group row">
                      <label for="author" class="col-md-2 col-form-label">"Your Name"</label>
                      <div class="col-md-10">
                        <input
                          type="text"
                          id="author"
                          name=Field::Author.name()
                          placeholder="Your name"
                          class="form-control"
                          prop:value = move || state.with(|s| s.draft().author.clone())
                          on:input = move |ev| on_input(Field::Author, ev)
                          on:blur = move |_| on_blur(Field::Author)
                        />
                        <FieldError state field = Field::Author />
                      </div>
                    </div>
                    <div class="form-group row">
                      <label for="text" class="col-md-2 col-form-label">"Comment"</label>
                      <div class="col-md-10">
                        <textarea
                          id="text"
                          name=Field::Text.name()
                          rows="6"
                          class="form-control"
                          prop:value = move || state.with(|s| s.draft().text.clone())
                          on:input = move |ev| on_input(Field::Text, ev)
                          on:blur = move |_| on_blur(Field::Text)
                        ></textarea>
                        <FieldError state field = Field::Text />
                      </div>
                    </div>
                    <div class="form-group row">
                      <div class="col-md-10 offset-md-2">
                        <button type="submit" class="btn btn-primary">"Submit"</button>
                      </div>
                    </div>
                  </form>
                </div>
              </div>
            </div>
          </div>
        </Show>
      </div>
    }
}

#[component]
fn FieldError(state: RwSignal<form::CommentForm>, field: Field) -> impl IntoView {
    move || {
        state
            .with(|s| s.error(field))
            .map(|msg| view! { <div class="text-danger">{ msg }</div> })
    }
}
