//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jfloat, jstring};
use jni::JNIEnv;

use crate::{render_json, render_json_to_svg};

/// Render a request JSON record to scene JSON.
///
/// Called from Kotlin as:
///   external fun renderJson(requestJson: String, canvasWidth: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_notedrill_app_StaffLib_renderJson(
    mut env: JNIEnv,
    _class: JClass,
    request_json: JString,
    canvas_width: jfloat,
) -> jstring {
    let json: String = match env.get_string(&request_json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let cw = if canvas_width > 0.0 { Some(canvas_width as f64) } else { None };

    match render_json(&json, cw) {
        Ok(scene) => match env.new_string(&scene) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render a request JSON record to SVG.
///
/// Called from Kotlin as:
///   external fun renderSvg(requestJson: String, canvasWidth: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_notedrill_app_StaffLib_renderSvg(
    mut env: JNIEnv,
    _class: JClass,
    request_json: JString,
    canvas_width: jfloat,
) -> jstring {
    let json: String = match env.get_string(&request_json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let cw = if canvas_width > 0.0 { Some(canvas_width as f64) } else { None };

    match render_json_to_svg(&json, cw) {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}
