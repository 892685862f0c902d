//! Process-global V8 platform initialization.

use std::sync::Once;

static V8_INIT: Once = Once::new();

/// Initialize the per-process V8 platform.
///
/// Must run before the first isolate is created. Safe to call more than
/// once; only the first call does anything, so flags passed on later calls
/// are ignored. The platform stays alive for the rest of the process, there
/// is no matching teardown.
pub fn init(flags: Option<&str>) {
    V8_INIT.call_once(|| {
        if let Some(flags) = flags {
            if !flags.is_empty() {
                v8::V8::set_flags_from_string(flags);
            }
        }
        let platform = v8::new_default_platform(0, false).make_shared();
        v8::V8::initialize_platform(platform);
        v8::V8::initialize();
    });
}
