use leptos::*;
use leptos_router::*;

use campsite_core::entities::campsite::Campsite;

use crate::Page;

#[component]
pub fn Directory(campsites: Vec<Campsite>) -> impl IntoView {
    view! {
      <div class="container">
        <div class="row">
          <div class="col">
            <h2>"Directory"</h2>
            <hr />
          </div>
        </div>
        <div class="row">
          {
            campsites
              .into_iter()
              .map(|campsite| view! { <DirectoryItem campsite /> })
              .collect_view()
          }
        </div>
      </div>
    }
}

#[component]
fn DirectoryItem(campsite: Campsite) -> impl IntoView {
    let Campsite {
        id, name, image, ..
    } = campsite;

    view! {
      <div class="col-md-5 m-1">
        <A href=format!("{}/{id}", Page::Directory.path())>
          <div class="card">
            <img class="card-img" width="100%" src=image alt=name.clone() />
            <div class="card-img-overlay">
              <h5 class="card-title">{ name }</h5>
            </div>
          </div>
        </A>
      </div>
    }
}
