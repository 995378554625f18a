pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{campsite_builder::*, comment_builder::*};

pub mod campsite_builder {

    use super::*;
    use crate::campsite::*;

    #[derive(Debug)]
    pub struct CampsiteBuild {
        campsite: Campsite,
    }

    impl CampsiteBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.campsite.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.campsite.name = name.into();
            self
        }
        pub fn image(mut self, image: &str) -> Self {
            self.campsite.image = image.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.campsite.description = desc.into();
            self
        }
        pub fn finish(self) -> Campsite {
            self.campsite
        }
    }

    impl Builder for Campsite {
        type Build = CampsiteBuild;
        fn build() -> CampsiteBuild {
            CampsiteBuild {
                campsite: Campsite {
                    id: "0".into(),
                    name: String::new(),
                    image: String::new(),
                    description: String::new(),
                },
            }
        }
    }
}

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, rating::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn campsite_id(mut self, id: &str) -> Self {
            self.comment.campsite_id = id.into();
            self
        }
        pub fn rating(mut self, rating: u8) -> Self {
            self.comment.rating = RatingValue::new(rating);
            self
        }
        pub fn author(mut self, author: &str) -> Self {
            self.comment.author = author.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.comment.text = text.into();
            self
        }
        pub fn date(mut self, date: Timestamp) -> Self {
            self.comment.date = date;
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: "0".into(),
                    campsite_id: "0".into(),
                    rating: RatingValue::default(),
                    author: String::new(),
                    text: String::new(),
                    date: Timestamp::now(),
                },
            }
        }
    }
}
