use wasm_bindgen::JsCast;

use crate::api::{ApiError, SelectedDocument};

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

fn browser_error(context: &str) -> ApiError {
    ApiError::unknown(format!("Failed to {}", context))
}

pub fn download_bytes(filename: &str, mime: &str, bytes: &[u8]) -> Result<(), ApiError> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &options)
        .map_err(|_| browser_error("create blob"))?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| browser_error("create object URL"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| browser_error("access document"))?;
    let element = document
        .create_element("a")
        .map_err(|_| browser_error("create link"))?;
    let a = element
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| browser_error("cast anchor"))?;
    a.set_href(&url);
    a.set_download(filename);
    a.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or_else(|| browser_error("access body"))?
        .append_child(&a)
        .map_err(|_| browser_error("append link"))?;
    a.click();
    a.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    log::debug!("downloaded {} ({} bytes)", filename, bytes.len());
    Ok(())
}

/// Opens a blank window holding `html` and asks the browser to print it.
pub fn open_print_window(html: &str) -> Result<(), ApiError> {
    let window = web_sys::window().ok_or_else(|| browser_error("access window"))?;
    let print_window = window
        .open_with_url_and_target("", "_blank")
        .map_err(|_| browser_error("open print window"))?
        .ok_or_else(|| ApiError::unknown("The print window was blocked by the browser"))?;
    let root = print_window
        .document()
        .and_then(|doc| doc.document_element())
        .ok_or_else(|| browser_error("access print document"))?;
    root.set_inner_html(html);
    print_window
        .print()
        .map_err(|_| browser_error("start printing"))?;
    Ok(())
}

pub async fn read_file(file: web_sys::File) -> Result<SelectedDocument, ApiError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| browser_error("read the selected file"))?;
    Ok(SelectedDocument {
        file_name: file.name(),
        mime_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}
