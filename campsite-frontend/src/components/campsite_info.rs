use leptos::*;
use leptos_router::*;

use campsite_core::{
    display::{CampsiteView, DisplayMode},
    entities::{campsite::Campsite, comment::Comment, id::Id, rating::RatingValue},
};

use crate::{components::*, Page};

#[component]
pub fn CampsiteInfo<F>(
    #[prop(into)] is_loading: MaybeSignal<bool>,
    #[prop(into)] err_mess: MaybeSignal<Option<String>>,
    #[prop(into)] campsite: Signal<Option<Campsite>>,
    #[prop(into)] comments: Signal<Option<Vec<Comment>>>,
    add_comment: F,
) -> impl IntoView
where
    F: Fn(Id, RatingValue, String, String) + 'static + Copy,
{
    move || {
        let err_mess = err_mess.get();
        let campsite = campsite.get();
        match DisplayMode::select(is_loading.get(), err_mess.as_deref(), campsite.as_ref()) {
            DisplayMode::Loading => view! {
              <div class="container">
                <div class="row">
                  <Loading />
                </div>
              </div>
            }
            .into_view(),
            DisplayMode::Error(msg) => view! {
              <div class="container">
                <div class="row">
                  <div class="col">
                    <h4>{ msg.to_owned() }</h4>
                  </div>
                </div>
              </div>
            }
            .into_view(),
            DisplayMode::Campsite(campsite) => view! {
              <CampsiteProfile campsite = campsite.clone() comments add_comment />
            }
            .into_view(),
            DisplayMode::Empty => view! { <div></div> }.into_view(),
        }
    }
}

#[component]
fn CampsiteProfile<F>(
    campsite: Campsite,
    comments: Signal<Option<Vec<Comment>>>,
    add_comment: F,
) -> impl IntoView
where
    F: Fn(Id, RatingValue, String, String) + 'static + Copy,
{
    let campsite_view = CampsiteView::new(&campsite, Page::Directory.path());
    let breadcrumb = campsite_view
        .breadcrumb
        .iter()
        .map(|crumb| match crumb.href {
            Some(href) => view! {
              <li class="breadcrumb-item">
                <A href=href.to_owned() exact=true>{ crumb.label.to_owned() }</A>
              </li>
            },
            None => view! {
              <li class="breadcrumb-item active" aria-current="page">{ crumb.label.to_owned() }</li>
            },
        })
        .collect_view();
    let heading = campsite_view.heading.to_owned();
    let campsite_id = campsite.id.clone();

    view! {
      <div class="container">
        <div class="row">
          <div class="col">
            <nav aria-label="breadcrumb">
              <ol class="breadcrumb">{ breadcrumb }</ol>
            </nav>
            <h2>{ heading }</h2>
            <hr />
          </div>
        </div>
        <div class="row">
          <CampsiteDetail campsite />
          <Comments comments campsite_id add_comment />
        </div>
      </div>
    }
}
