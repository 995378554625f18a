use leptos::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
      <div class="col">
        <i class="fa fa-spinner fa-pulse fa-3x fa-fw text-primary"></i>
        <p>"Loading..."</p>
      </div>
    }
}
