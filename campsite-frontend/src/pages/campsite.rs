use leptos::*;
use leptos_router::*;

use campsite_core::{
    comment::comments_of,
    entities::{campsite::Campsite, comment::Comment, id::Id, rating::RatingValue},
};

use crate::components::*;

#[component]
pub fn CampsitePage<F>(
    campsites: StoredValue<Vec<Campsite>>,
    comments: Signal<Vec<Comment>>,
    err_mess: Option<String>,
    add_comment: F,
) -> impl IntoView
where
    F: Fn(Id, RatingValue, String, String) + 'static + Copy,
{
    let params = use_params_map();

    // -- memos -- //

    let campsite_id = create_memo(move |_| params.with(|p| p.get("id").cloned()));

    let campsite = Signal::derive(move || {
        let id = campsite_id.get()?;
        campsites.with_value(|campsites| campsites.iter().find(|c| c.id.as_str() == id).cloned())
    });

    let campsite_comments = Signal::derive(move || {
        let id = campsite_id.get()?;
        let id = Id::from(id);
        Some(comments.with(|comments| {
            comments_of(&id, comments)
                .cloned()
                .collect::<Vec<_>>()
        }))
    });

    view! {
      <CampsiteInfo
        is_loading = false
        err_mess
        campsite
        comments = campsite_comments
        add_comment
      />
    }
}
