//! Portrait Component
//!
//! Profile illustration clipped to an organic blob.

use dioxus::prelude::*;

use crate::theme::colors;

const BLOB_PATH: &str = "M9.19024 145.964C34.0253 76.5814 114.865 54.7299 184.111 29.4823C245.804 6.98884 311.86 -14.9503 370.735 14.143C431.207 44.026 467.948 107.508 477.191 174.311C485.897 237.229 454.931 294.377 416.506 344.954C373.74 401.245 326.068 462.801 255.442 466.189C179.416 469.835 111.552 422.137 65.1576 361.805C17.4835 299.81 -17.1617 219.583 9.19024 145.964Z";

/// Blob-masked portrait
#[component]
pub fn Portrait(
    /// Image path, used verbatim
    src: String,
) -> Element {
    rsx! {
        div { class: "portrait",
            svg {
                class: "portrait-blob",
                view_box: "0 0 479 467",
                xmlns: "http://www.w3.org/2000/svg",
                mask { id: "portrait-mask", "mask-type": "alpha",
                    path { d: BLOB_PATH }
                }
                g { "mask": "url(#portrait-mask)",
                    path { d: BLOB_PATH, fill: colors::CYAN }
                    image { class: "portrait-image", "y": "10", "href": "{src}" }
                }
            }
        }
    }
}
