use crate::entities::campsite::Campsite;

/// What the campsite info view shows.
///
/// Exactly one mode is chosen with the precedence
/// loading > error > campsite > nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode<'a> {
    Loading,
    Error(&'a str),
    Campsite(&'a Campsite),
    Empty,
}

impl<'a> DisplayMode<'a> {
    #[must_use]
    pub fn select(
        is_loading: bool,
        err_mess: Option<&'a str>,
        campsite: Option<&'a Campsite>,
    ) -> Self {
        if is_loading {
            return Self::Loading;
        }
        // An empty message is no error.
        if let Some(msg) = err_mess.filter(|msg| !msg.is_empty()) {
            return Self::Error(msg);
        }
        match campsite {
            Some(campsite) => Self::Campsite(campsite),
            None => Self::Empty,
        }
    }
}

/// One item of the breadcrumb trail.
///
/// Only the last item is active and it never links anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crumb<'a> {
    pub label: &'a str,
    pub href: Option<&'a str>,
}

impl Crumb<'_> {
    pub const fn is_active(&self) -> bool {
        self.href.is_none()
    }
}

/// What is shown of a loaded campsite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampsiteView<'a> {
    pub breadcrumb: [Crumb<'a>; 2],
    pub heading: &'a str,
    pub image: &'a str,
    pub image_alt: &'a str,
    pub description: &'a str,
}

impl<'a> CampsiteView<'a> {
    pub const DIRECTORY_LABEL: &'static str = "Directory";

    #[must_use]
    pub fn new(campsite: &'a Campsite, directory_path: &'a str) -> Self {
        let Campsite {
            name,
            image,
            description,
            ..
        } = campsite;
        Self {
            breadcrumb: [
                Crumb {
                    label: Self::DIRECTORY_LABEL,
                    href: Some(directory_path),
                },
                Crumb {
                    label: name,
                    href: None,
                },
            ],
            heading: name,
            image,
            image_alt: name,
            description,
        }
    }
}
