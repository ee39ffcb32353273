//! Raw libunbound bindings, limited to what `UnboundEngine` calls.
#![allow(non_camel_case_types)]

use libc::{c_char, c_int, c_void};

#[repr(C)]
pub struct ub_ctx {
    _private: [u8; 0],
}

/// Leading fields of `struct ub_result`. Newer libunbound releases append
/// fields after `why_bogus`; the struct is only ever read through a pointer
/// the library allocated, so they can be left out.
#[repr(C)]
pub struct ub_result {
    pub qname: *mut c_char,
    pub qtype: c_int,
    pub qclass: c_int,
    pub data: *mut *mut c_char,
    pub len: *mut c_int,
    pub canonname: *mut c_char,
    pub rcode: c_int,
    pub answer_packet: *mut c_void,
    pub answer_len: c_int,
    pub havedata: c_int,
    pub nxdomain: c_int,
    pub secure: c_int,
    pub bogus: c_int,
    pub why_bogus: *mut c_char,
}

pub const UB_NOMEM: c_int = -2;
pub const UB_SYNTAX: c_int = -3;

#[link(name = "unbound")]
extern "C" {
    pub fn ub_ctx_create() -> *mut ub_ctx;
    pub fn ub_ctx_delete(ctx: *mut ub_ctx);
    pub fn ub_ctx_set_option(ctx: *mut ub_ctx, opt: *const c_char, val: *const c_char) -> c_int;
    pub fn ub_ctx_get_option(ctx: *mut ub_ctx, opt: *const c_char, str: *mut *mut c_char)
        -> c_int;
    pub fn ub_ctx_config(ctx: *mut ub_ctx, fname: *const c_char) -> c_int;
    pub fn ub_ctx_set_fwd(ctx: *mut ub_ctx, addr: *const c_char) -> c_int;
    pub fn ub_ctx_resolvconf(ctx: *mut ub_ctx, fname: *const c_char) -> c_int;
    pub fn ub_ctx_hosts(ctx: *mut ub_ctx, fname: *const c_char) -> c_int;
    pub fn ub_ctx_add_ta(ctx: *mut ub_ctx, ta: *const c_char) -> c_int;
    pub fn ub_ctx_add_ta_file(ctx: *mut ub_ctx, fname: *const c_char) -> c_int;
    pub fn ub_ctx_trustedkeys(ctx: *mut ub_ctx, fname: *const c_char) -> c_int;
    pub fn ub_ctx_zone_add(ctx: *mut ub_ctx, zone_name: *const c_char, zone_type: *const c_char)
        -> c_int;
    pub fn ub_ctx_zone_remove(ctx: *mut ub_ctx, zone_name: *const c_char) -> c_int;
    pub fn ub_ctx_data_add(ctx: *mut ub_ctx, data: *const c_char) -> c_int;
    pub fn ub_ctx_data_remove(ctx: *mut ub_ctx, data: *const c_char) -> c_int;
    pub fn ub_ctx_debuglevel(ctx: *mut ub_ctx, d: c_int) -> c_int;
    pub fn ub_resolve(
        ctx: *mut ub_ctx,
        name: *const c_char,
        rrtype: c_int,
        rrclass: c_int,
        result: *mut *mut ub_result,
    ) -> c_int;
    pub fn ub_resolve_free(result: *mut ub_result);
    pub fn ub_strerror(err: c_int) -> *const c_char;
}
