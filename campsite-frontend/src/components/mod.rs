mod campsite_detail;
mod campsite_info;
mod comment_form;
mod comments;
mod loading;

pub use self::{campsite_detail::*, campsite_info::*, comment_form::*, comments::*, loading::*};
