use leptos::*;
use leptos_router::*;

use campsite_core::entities::{
    comment::{Comment, NewComment},
    id::Id,
    rating::RatingValue,
    time::Timestamp,
};

mod pages;
use pages::*;

mod components;
pub use components::*;

mod seed;

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let (campsites, comments, err_mess) = match seed::load() {
        Ok((campsites, comments)) => (campsites, comments, None),
        Err(err) => {
            log::error!("Unable to load campsites: {err}");
            (vec![], vec![], Some(format!("{err}")))
        }
    };
    let campsites = StoredValue::new(campsites);
    let comments = RwSignal::new(comments);
    let err_mess = StoredValue::new(err_mess);

    // -- callbacks -- //

    let add_comment = move |campsite_id: Id, rating: RatingValue, author: String, text: String| {
        comments.update(|comments: &mut Vec<Comment>| {
            let id = Id::from(comments.len().to_string());
            log::info!("Add comment {id} to campsite {campsite_id}");
            let new_comment = NewComment {
                campsite_id,
                rating,
                author,
                text,
            };
            comments.push(new_comment.into_comment(id, Timestamp::now()));
        });
    };

    view! {
      <Router>
        <main>
          <Routes>
            <Route
              path="/"
              view=move || view! { <Redirect path=Page::Directory.path() /> }
            />
            <Route
              path=Page::Directory.path()
              view=move || view! { <Directory campsites = campsites.get_value() /> }
            />
            <Route
              path=format!("{}/:id", Page::Directory.path())
              view=move || view! {
                <CampsitePage
                  campsites
                  comments = comments.into()
                  err_mess = err_mess.get_value()
                  add_comment
                />
              }
            />
          </Routes>
        </main>
      </Router>
    }
}
