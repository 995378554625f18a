use leptos::*;

use campsite_core::{display::CampsiteView, entities::campsite::Campsite};

use crate::Page;

/// Image and description of a campsite.
#[component]
pub fn CampsiteDetail(campsite: Campsite) -> impl IntoView {
    let CampsiteView {
        image,
        image_alt,
        description,
        ..
    } = CampsiteView::new(&campsite, Page::Directory.path());

    view! {
      <div class="col-md-5 m-1">
        <div class="card">
          <img class="card-img-top" src=image.to_owned() alt=image_alt.to_owned() />
          <div class="card-body">
            <p class="card-text">{ description.to_owned() }</p>
          </div>
        </div>
      </div>
    }
}
