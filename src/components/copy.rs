use crate::prelude::*;

use crate::{
    components::svg::{ContentCopy, DrawSvg, SvgSize::Size5},
    utils::CCStr,
};

#[component]
pub fn CopyToClipboardButtonIcon(value: CCStr, disabled: Option<bool>) -> Element {
    let clipboard_service = state_management::use_clipboard_service();
    rsx! {
        button {
            class: "btn btn-circle btn-xs",
            onclick: move |_| {
                state_management::copy_to_clipboard(clipboard_service, value.as_ref());
            },
            disabled,
            DrawSvg::<ContentCopy> { size: Size5 }
        }
    }
}
