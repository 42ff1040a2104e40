//! Client call stubs, one function per route.
//!
//! Each stub forwards to the configured helper module; transport and
//! (de)serialization of the call happen there.

use super::code_writer::CodeWriter;
use super::context::EmitContext;
use super::naming::{IdentKind, identifier};
use super::rust_types::type_expr;
use stonegen_core::Route;

/// How a route moves its payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStyle {
    /// JSON argument, JSON result.
    Rpc,
    /// JSON argument, raw body in the response.
    Download,
    /// Raw body in the request, JSON result.
    Upload,
}

impl RouteStyle {
    pub fn parse(style: &str) -> Option<Self> {
        match style {
            "rpc" => Some(RouteStyle::Rpc),
            "download" => Some(RouteStyle::Download),
            "upload" => Some(RouteStyle::Upload),
            _ => None,
        }
    }
}

/// `Endpoint` variant for a route's `host` attribute.
pub fn endpoint_variant(host: &str) -> Option<&'static str> {
    match host {
        "api" => Some("Api"),
        "content" => Some("Content"),
        "notify" => Some("Notify"),
        _ => None,
    }
}

/// Emit the stub for `route`, or record an error and emit nothing when its
/// host or style is not one the helper API supports.
pub fn emit_route(ctx: &EmitContext<'_>, w: &mut CodeWriter, route: &Route) {
    let Some(variant) = endpoint_variant(route.host()) else {
        ctx.diagnostics.error(
            ctx.subject(&route.name),
            format!("unsupported route host {:?}, route skipped", route.host()),
        );
        return;
    };
    let Some(style) = RouteStyle::parse(route.style()) else {
        ctx.diagnostics.error(
            ctx.subject(&route.name),
            format!("unsupported route style {:?}, route skipped", route.style()),
        );
        return;
    };

    let name = identifier(&route.name, IdentKind::Route);
    let endpoint = ctx.client_trait(&format!("Endpoint::{variant}"));
    let path = format!("{:?}", format!("{}/{}", ctx.namespace.name, route.name));
    let arg = type_expr(ctx, &route.arg);
    let result = type_expr(ctx, &route.result);
    let error = type_expr(ctx, &route.error);
    let transport_result = &ctx.config.result_path;

    let (extra_params, success, call): (Vec<&str>, String, String) = match style {
        RouteStyle::Rpc => (
            vec![],
            result,
            format!(
                "{}(client, {endpoint}, {path}, arg, None)",
                ctx.client_helper("request")
            ),
        ),
        RouteStyle::Download => (
            vec!["range_start: Option<u64>", "range_end: Option<u64>"],
            format!("{}<{result}>", ctx.client_trait("HttpRequestResult")),
            format!(
                "{}(client, {endpoint}, {path}, arg, None, range_start, range_end)",
                ctx.client_helper("request_with_body")
            ),
        ),
        RouteStyle::Upload => (
            vec!["body: Vec<u8>"],
            format!("{}<{result}>", ctx.client_trait("HttpRequestResult")),
            format!(
                "{}(client, {endpoint}, {path}, arg, Some(body), None, None)",
                ctx.client_helper("request_with_body")
            ),
        ),
    };

    ctx.doc(w, route.doc.as_deref());
    w.line(format!("pub fn {name}("));
    w.indented(|w| {
        w.line(format!("client: &dyn {},", ctx.client_trait("HttpClient")));
        w.line(format!("arg: &{arg},"));
        for param in &extra_params {
            w.line(format!("{param},"));
        }
    });
    w.block(
        &format!(") -> {transport_result}<Result<{success}, {error}>>"),
        |w| w.line(call),
    );
    w.blank_line();
}
