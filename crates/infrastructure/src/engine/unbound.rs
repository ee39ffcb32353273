use super::ffi;
use crate::system::locking::{self, LockTable};
use bytes::Bytes;
use ferrous_resolv_application::ports::{EngineConfigurator, RawAnswer, ResolverEngine};
use ferrous_resolv_domain::ResolveError;
use libc::{c_char, c_int};
use std::ffi::{CStr, CString};
use std::ptr::{self, NonNull};
use std::slice;
use std::sync::Arc;
use tracing::debug;

/// Lock held while a context is created or deleted.
const CONTEXT_LOCK: usize = 0;

/// [`ResolverEngine`] over a libunbound context.
pub struct UnboundEngine {
    ctx: NonNull<ffi::ub_ctx>,
    locks: Arc<LockTable>,
}

// SAFETY: libunbound serializes access to a context internally, so
// `ub_resolve` may be called from several threads at once. The mutating
// `ub_ctx_*` setup calls need `&mut self`, which the borrow checker keeps
// apart from concurrent resolves.
unsafe impl Send for UnboundEngine {}
unsafe impl Sync for UnboundEngine {}

impl UnboundEngine {
    pub fn new() -> Result<Self, ResolveError> {
        let locks = locking::init(locking::DEFAULT_LOCK_COUNT);

        // Context creation sets up process-global crypto state.
        // SAFETY: no preconditions; NULL signals failure.
        let ctx = locks
            .with_lock(CONTEXT_LOCK, || unsafe { ffi::ub_ctx_create() })
            .unwrap_or(ptr::null_mut());
        let ctx = NonNull::new(ctx).ok_or_else(|| ResolveError::Engine {
            code: ffi::UB_NOMEM,
            message: strerror(ffi::UB_NOMEM),
        })?;

        debug!("libunbound context created");
        Ok(Self { ctx, locks })
    }

    fn with_cstr(
        &mut self,
        arg: &str,
        call: impl FnOnce(*mut ffi::ub_ctx, *const c_char) -> c_int,
    ) -> i32 {
        match CString::new(arg) {
            Ok(arg) => call(self.ctx.as_ptr(), arg.as_ptr()),
            Err(_) => ffi::UB_SYNTAX,
        }
    }
}

impl Drop for UnboundEngine {
    fn drop(&mut self) {
        let ctx = self.ctx.as_ptr();
        // SAFETY: ctx came from ub_ctx_create and is deleted exactly once.
        self.locks
            .with_lock(CONTEXT_LOCK, || unsafe { ffi::ub_ctx_delete(ctx) });
    }
}

fn strerror(code: c_int) -> String {
    // SAFETY: ub_strerror returns a pointer to a static string.
    let message = unsafe { ffi::ub_strerror(code) };
    if message.is_null() {
        return format!("unknown error {}", code);
    }
    unsafe { CStr::from_ptr(message) }
        .to_string_lossy()
        .into_owned()
}

unsafe fn owned_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
    }
}

/// Copies a native result into a [`RawAnswer`].
///
/// The native rdata array is NULL-terminated; the copy carries an explicit
/// entry count instead.
unsafe fn copy_result(result: &ffi::ub_result) -> RawAnswer {
    let mut raw = RawAnswer::new(
        owned_string(result.qname).unwrap_or_default(),
        result.qtype as u16,
        result.qclass as u16,
    );

    if !result.data.is_null() && !result.len.is_null() {
        let mut index = 0;
        loop {
            let entry = *result.data.add(index);
            if entry.is_null() {
                break;
            }
            let length = usize::try_from(*result.len.add(index)).unwrap_or(0);
            let rdata = slice::from_raw_parts(entry as *const u8, length);
            raw.data.push(Bytes::copy_from_slice(rdata));
            raw.len.push(length);
            index += 1;
        }
    }

    raw.canonname = owned_string(result.canonname);
    raw.rcode = result.rcode;

    if !result.answer_packet.is_null() {
        let length = usize::try_from(result.answer_len).unwrap_or(0);
        let packet = slice::from_raw_parts(result.answer_packet as *const u8, length);
        raw.answer_packet = Bytes::copy_from_slice(packet);
    }

    raw.havedata = result.havedata != 0;
    raw.nxdomain = result.nxdomain != 0;
    raw.secure = result.secure != 0;
    raw.bogus = result.bogus != 0;
    raw.why_bogus = owned_string(result.why_bogus);
    raw
}

impl ResolverEngine for UnboundEngine {
    fn resolve(&self, name: &str, record_type: u16, class: u16) -> (RawAnswer, i32) {
        let Ok(c_name) = CString::new(name) else {
            return (RawAnswer::default(), ffi::UB_SYNTAX);
        };

        let mut result: *mut ffi::ub_result = ptr::null_mut();
        // SAFETY: ctx is live for &self; c_name outlives the call.
        let code = unsafe {
            ffi::ub_resolve(
                self.ctx.as_ptr(),
                c_name.as_ptr(),
                c_int::from(record_type),
                c_int::from(class),
                &mut result,
            )
        };

        if code != 0 || result.is_null() {
            return (RawAnswer::default(), code);
        }

        // SAFETY: result is a valid ub_result owned by us until freed below.
        let raw = unsafe { copy_result(&*result) };
        unsafe { ffi::ub_resolve_free(result) };
        (raw, 0)
    }

    fn error_string(&self, code: i32) -> String {
        strerror(code)
    }
}

impl EngineConfigurator for UnboundEngine {
    fn config_file(&mut self, path: &str) -> i32 {
        self.with_cstr(path, |ctx, path| unsafe { ffi::ub_ctx_config(ctx, path) })
    }

    fn set_option(&mut self, name: &str, value: &str) -> i32 {
        let (Ok(name), Ok(value)) = (CString::new(name), CString::new(value)) else {
            return ffi::UB_SYNTAX;
        };
        unsafe { ffi::ub_ctx_set_option(self.ctx.as_ptr(), name.as_ptr(), value.as_ptr()) }
    }

    fn get_option(&mut self, name: &str) -> (String, i32) {
        let Ok(name) = CString::new(name) else {
            return (String::new(), ffi::UB_SYNTAX);
        };

        let mut value: *mut c_char = ptr::null_mut();
        let code =
            unsafe { ffi::ub_ctx_get_option(self.ctx.as_ptr(), name.as_ptr(), &mut value) };
        if code != 0 || value.is_null() {
            return (String::new(), code);
        }

        // SAFETY: value is a malloc'd C string handed to the caller.
        let text = unsafe { owned_string(value) }.unwrap_or_default();
        unsafe { libc::free(value.cast()) };
        (text, 0)
    }

    fn resolv_conf(&mut self, path: &str) -> i32 {
        self.with_cstr(path, |ctx, path| unsafe { ffi::ub_ctx_resolvconf(ctx, path) })
    }

    fn hosts(&mut self, path: &str) -> i32 {
        self.with_cstr(path, |ctx, path| unsafe { ffi::ub_ctx_hosts(ctx, path) })
    }

    fn set_forwarder(&mut self, addr: &str) -> i32 {
        self.with_cstr(addr, |ctx, addr| unsafe { ffi::ub_ctx_set_fwd(ctx, addr) })
    }

    fn add_trust_anchor(&mut self, anchor: &str) -> i32 {
        self.with_cstr(anchor, |ctx, anchor| unsafe { ffi::ub_ctx_add_ta(ctx, anchor) })
    }

    fn add_trust_anchor_file(&mut self, path: &str) -> i32 {
        self.with_cstr(path, |ctx, path| unsafe { ffi::ub_ctx_add_ta_file(ctx, path) })
    }

    fn trusted_keys(&mut self, path: &str) -> i32 {
        self.with_cstr(path, |ctx, path| unsafe { ffi::ub_ctx_trustedkeys(ctx, path) })
    }

    fn zone_add(&mut self, zone_name: &str, zone_type: &str) -> i32 {
        let (Ok(zone_name), Ok(zone_type)) = (CString::new(zone_name), CString::new(zone_type))
        else {
            return ffi::UB_SYNTAX;
        };
        unsafe { ffi::ub_ctx_zone_add(self.ctx.as_ptr(), zone_name.as_ptr(), zone_type.as_ptr()) }
    }

    fn zone_remove(&mut self, zone_name: &str) -> i32 {
        self.with_cstr(zone_name, |ctx, name| unsafe { ffi::ub_ctx_zone_remove(ctx, name) })
    }

    fn data_add(&mut self, data: &str) -> i32 {
        self.with_cstr(data, |ctx, data| unsafe { ffi::ub_ctx_data_add(ctx, data) })
    }

    fn data_remove(&mut self, data: &str) -> i32 {
        self.with_cstr(data, |ctx, data| unsafe { ffi::ub_ctx_data_remove(ctx, data) })
    }

    fn debug_level(&mut self, level: i32) -> i32 {
        unsafe { ffi::ub_ctx_debuglevel(self.ctx.as_ptr(), level) }
    }
}
