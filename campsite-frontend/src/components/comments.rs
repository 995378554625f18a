use leptos::*;

use campsite_core::{
    comment::{comment_entries, CommentEntry},
    entities::{comment::Comment, id::Id, rating::RatingValue},
};

use crate::components::*;

#[component]
pub fn Comments<F>(
    #[prop(into)] comments: Signal<Option<Vec<Comment>>>,
    campsite_id: Id,
    add_comment: F,
) -> impl IntoView
where
    F: Fn(Id, RatingValue, String, String) + 'static + Copy,
{
    let campsite_id = StoredValue::new(campsite_id);
    let entries =
        create_memo(move |_| comments.with(|comments| comment_entries(comments.as_deref())));

    move || {
        entries.get().map(|entries| {
            view! {
              <div class="col-md-5 m-1">
                <h4>"Comments"</h4>
                {
                  entries
                    .into_iter()
                    .map(|entry| view! { <CommentItem entry /> })
                    .collect_view()
                }
                <CommentForm campsite_id = campsite_id.get_value() add_comment />
              </div>
            }
        })
    }
}

#[component]
fn CommentItem(entry: CommentEntry) -> impl IntoView {
    let CommentEntry { text, attribution } = entry;
    view! {
      <div class="comment-item">
        <p>{ text }</p>
        <p>{ attribution }</p>
      </div>
    }
}
