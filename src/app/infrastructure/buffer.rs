/// Read text from an FLTK TextBuffer without leaking the C-allocated copy.
///
/// fltk-rs's `TextBuffer::text()` calls FLTK's `Fl_Text_Buffer_text()` which
/// returns a `malloc()`'d C string. The Rust wrapper copies this to a String
/// but never frees the original C pointer. Documents and their style
/// buffers are read on every save and every selection change, so this
/// helper calls the FFI directly and frees the C allocation.
pub fn buffer_text_no_leak(buf: &fltk::text::TextBuffer) -> String {
    unsafe extern "C" {
        fn Fl_Text_Buffer_text(buf: *mut std::ffi::c_void) -> *mut std::ffi::c_char;
        fn free(ptr: *mut std::ffi::c_void);
    }

    // SAFETY: buf.as_ptr() is the live FLTK buffer; Fl_Text_Buffer_text
    // returns a malloc'd, null-terminated copy (or null when empty) which is
    // copied into a Rust String and released with free().
    unsafe {
        let inner = buf.as_ptr() as *mut std::ffi::c_void;
        let ptr = Fl_Text_Buffer_text(inner);
        if ptr.is_null() {
            return String::new();
        }
        let cstr = std::ffi::CStr::from_ptr(ptr);
        let result = cstr.to_string_lossy().into_owned();
        free(ptr as *mut std::ffi::c_void);
        result
    }
}

/// Byte of a single-byte-per-position buffer (style buffers) at `pos`,
/// clamped into range. Returns `None` for an empty buffer.
pub fn style_byte_at(styles: &str, pos: usize) -> Option<u8> {
    let bytes = styles.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    Some(bytes[pos.min(bytes.len() - 1)])
}
