//! Subject image decoding: HtmlImageElement -> 2D canvas -> RGBA8.

use pose_core::TextureData;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

async fn load_element(url: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_cross_origin(Some("anonymous"));
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::once_into_js(move || {
            _ = resolve.call0(&wasm_bindgen::JsValue::NULL);
        });
        let onerror = Closure::once_into_js(move || {
            _ = reject.call0(&wasm_bindgen::JsValue::NULL);
        });
        img.set_onload(Some(onload.unchecked_ref()));
        img.set_onerror(Some(onerror.unchecked_ref()));
    });
    img.set_src(url);
    JsFuture::from(promise)
        .await
        .map_err(|_| anyhow::anyhow!("failed to load image {}", url))?;
    img.set_onload(None);
    img.set_onerror(None);
    Ok(img)
}

/// Fetch and decode `url` into tightly packed RGBA pixels.
pub async fn load_rgba(url: &str) -> anyhow::Result<TextureData> {
    let img = load_element(url).await?;
    let (nw, nh) = (img.natural_width(), img.natural_height());
    if nw == 0 || nh == 0 {
        anyhow::bail!("image {} has no pixels", url);
    }
    let (w, h) = crate::input::texture_size(nw, nh);
    if (w, h) != (nw, nh) {
        log::info!("[texture] scaling {}x{} down to {}x{}", nw, nh, w, h);
    }
    let document = crate::dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let scratch = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    scratch.set_width(w);
    scratch.set_height(h);
    let ctx = scratch
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(&img, 0.0, 0.0, w as f64, h as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    // throws for tainted canvases, e.g. cross-origin images without CORS
    let data = ctx
        .get_image_data(0.0, 0.0, w as f64, h as f64)
        .map_err(|e| anyhow::anyhow!("reading pixels of {}: {:?}", url, e))?;
    TextureData::from_rgba(w, h, data.data().0)
        .ok_or_else(|| anyhow::anyhow!("decoded size mismatch for {}", url))
}
