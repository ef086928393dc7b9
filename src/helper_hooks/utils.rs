use dioxus::prelude::*;

use crate::utils::CCStr;

pub type LResult<T> = Option<Result<T, CCStr>>;
pub type FResource<T> = Resource<Result<T, CCStr>>;
