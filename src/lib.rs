//! stafflib — music notation layout and staff rendering library for NoteDrill.
//!
//! Takes one note or symbol description per call and computes the scene
//! needed to draw it on a five-line staff: vertical placement, ledger
//! lines, stem direction and flags, or a catalog symbol glyph.
//!
//! # Example
//! ```
//! use stafflib::{render_request, Clef, Duration, RenderRequest};
//!
//! let req = RenderRequest::note("E4", Duration::Quarter, Some(Clef::Treble));
//! let scene = render_request(&req, None);
//! assert!(!scene.is_empty());
//! println!("{}", scene.to_svg());
//! ```

pub mod model;
pub mod renderer;

#[cfg(target_os = "android")]
pub mod android;

pub use model::*;
pub use renderer::{render, render_request, resolve_position, Metrics, Prim, Scene};

/// Parse a request JSON record, render it, and return the scene as JSON.
///
/// `canvas_width` sets the logical canvas width. Pass `None` (or 0.0 from
/// FFI) to use the default (300). The request must populate exactly one of
/// `note`/`symbol`; a malformed pitch yields an empty scene rather than an
/// error, matching the render contract.
pub fn render_json(request_json: &str, canvas_width: Option<f64>) -> Result<String, RenderError> {
    let request: RenderRequest = serde_json::from_str(request_json)?;
    request_structure(&request)?;
    let scene = render_request(&request, canvas_width);
    Ok(scene.to_json()?)
}

/// Parse a request JSON record and render it straight to SVG.
/// Convenience for web views and visual inspection.
pub fn render_json_to_svg(
    request_json: &str,
    canvas_width: Option<f64>,
) -> Result<String, RenderError> {
    let request: RenderRequest = serde_json::from_str(request_json)?;
    request_structure(&request)?;
    Ok(render_request(&request, canvas_width).to_svg())
}

/// Structural validation only: exactly one payload. Pitch format is left
/// to the renderer's degrade-to-empty behavior.
fn request_structure(request: &RenderRequest) -> Result<(), RequestError> {
    match request.validate() {
        Err(RequestError::MalformedPitch(_)) | Ok(()) => Ok(()),
        Err(e) => Err(e),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Render a request JSON record and return the scene JSON as a C string.
/// The caller must free the returned string with `stafflib_free_string`.
///
/// `canvas_width` sets the logical canvas width. Pass 0.0 to use the default.
///
/// # Safety
/// `request_json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn stafflib_render_json(
    request_json: *const c_char,
    canvas_width: f64,
) -> *mut c_char {
    if request_json.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(request_json) };
    let json = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let cw = if canvas_width > 0.0 { Some(canvas_width) } else { None };

    match render_json(json, cw) {
        Ok(scene) => CString::new(scene).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render a request JSON record and return SVG as a C string.
/// The caller must free the returned string with `stafflib_free_string`.
///
/// `canvas_width` sets the logical canvas width. Pass 0.0 to use the default.
///
/// # Safety
/// `request_json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn stafflib_render_svg(
    request_json: *const c_char,
    canvas_width: f64,
) -> *mut c_char {
    if request_json.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(request_json) };
    let json = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let cw = if canvas_width > 0.0 { Some(canvas_width) } else { None };

    match render_json_to_svg(json, cw) {
        Ok(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by stafflib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a stafflib function, or null.
#[no_mangle]
pub unsafe extern "C" fn stafflib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
