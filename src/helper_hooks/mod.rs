mod blogs;
mod comments;
mod guards;
mod infinite_scroll;
mod tags;
mod utils;

pub mod prelude {
    pub use super::infinite_scroll::{
        InfiniteScrollOptions, LoaderState, PageRequest, UseInfiniteScroll,
    };
    pub use super::utils::{FResource, LResult};

    pub mod helper_hooks {
        pub use super::super::blogs::use_resource_blog;
        pub use super::super::comments::{
            use_resource_blog_comments, use_resource_pending_comments,
        };
        pub use super::super::guards::{use_auth_guard, use_author_guard};
        pub use super::super::infinite_scroll::use_infinite_scroll;
        pub use super::super::tags::use_resource_tags;
    }
}
