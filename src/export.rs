//! PDF Export
//!
//! Clones the rendered sheet into a fixed-size off-screen wrapper and hands
//! it to the html2pdf.js bundle loaded from index.html. The wrapper is
//! removed again on every exit path, success or failure.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Element;

/// A4 landscape at 96 dpi
const PDF_WIDTH_PX: u32 = 1123;
const PDF_HEIGHT_PX: u32 = 794;

#[wasm_bindgen]
extern "C" {
    type Html2Pdf;

    /// Global constructor from the html2pdf.js bundle
    #[wasm_bindgen(catch, js_name = html2pdf)]
    fn html2pdf() -> Result<Html2Pdf, JsValue>;

    #[wasm_bindgen(method)]
    fn set(this: &Html2Pdf, options: &JsValue) -> Html2Pdf;

    #[wasm_bindgen(method)]
    fn from(this: &Html2Pdf, element: &Element) -> Html2Pdf;

    #[wasm_bindgen(method, catch)]
    fn save(this: &Html2Pdf) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Serialize)]
struct PdfOptions {
    filename: &'static str,
    margin: u32,
    image: ImageOptions,
    html2canvas: CanvasOptions,
    #[serde(rename = "jsPDF")]
    js_pdf: JsPdfOptions,
}

#[derive(Serialize)]
struct ImageOptions {
    #[serde(rename = "type")]
    kind: &'static str,
    quality: f64,
}

#[derive(Serialize)]
struct CanvasOptions {
    scale: u32,
    #[serde(rename = "useCORS")]
    use_cors: bool,
    #[serde(rename = "backgroundColor")]
    background_color: &'static str,
}

#[derive(Serialize)]
struct JsPdfOptions {
    unit: &'static str,
    format: [u32; 2],
    orientation: &'static str,
}

fn export_options() -> PdfOptions {
    PdfOptions {
        filename: "stadt-land-fluss-zettel.pdf",
        margin: 0,
        image: ImageOptions {
            kind: "jpeg",
            quality: 0.98,
        },
        html2canvas: CanvasOptions {
            scale: 2,
            use_cors: true,
            background_color: "#ffffff",
        },
        js_pdf: JsPdfOptions {
            unit: "px",
            format: [PDF_WIDTH_PX, PDF_HEIGHT_PX],
            orientation: "landscape",
        },
    }
}

fn js_err(err: JsValue) -> String {
    format!("{err:?}")
}

/// Export the currently rendered sheet as a PDF download.
///
/// No-op when no sheet is rendered.
pub async fn download_sheet_pdf() -> Result<(), String> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Ok(());
    };
    let Some(sheet) = document.query_selector(".sheet").ok().flatten() else {
        return Ok(());
    };

    let clone: Element = sheet
        .clone_node_with_deep(true)
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "sheet clone is not an element".to_string())?;
    clone.set_class_name(&format!("{} sheet-pdf-export", sheet.class_name()));
    clone
        .set_attribute(
            "style",
            &format!(
                "transform: none; transform-origin: top left; margin: 0; \
                 width: {PDF_WIDTH_PX}px; height: {PDF_HEIGHT_PX}px; \
                 box-shadow: none; border: none; border-radius: 0;"
            ),
        )
        .map_err(js_err)?;

    let wrapper = document.create_element("div").map_err(js_err)?;
    wrapper
        .set_attribute(
            "style",
            &format!(
                "position: fixed; left: -100000px; top: 0; z-index: -1; \
                 background: white; padding: 0; \
                 width: {PDF_WIDTH_PX}px; height: {PDF_HEIGHT_PX}px;"
            ),
        )
        .map_err(js_err)?;
    wrapper.append_child(&clone).map_err(js_err)?;

    let body = document.body().ok_or_else(|| "no document body".to_string())?;
    body.append_child(&wrapper).map_err(js_err)?;

    // the wrapper is in the document from here on: clean up on every path
    let result = run_export(&clone).await;
    wrapper.remove();
    result
}

async fn run_export(element: &Element) -> Result<(), String> {
    let options = serde_wasm_bindgen::to_value(&export_options()).map_err(|err| err.to_string())?;
    let exporter = html2pdf().map_err(js_err)?;
    let saving = exporter.set(&options).from(element).save().map_err(js_err)?;

    JsFuture::from(saving).await.map(|_| ()).map_err(js_err)
}
