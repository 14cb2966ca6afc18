pub const LOCAL_API_BASE: &str = "http://localhost:8000";
pub const REMOTE_API_BASE: &str = "https://smart-planner-api.up.railway.app";

/// Pick the API base URL for a client, from the host it reached us on.
/// Loopback names get the local backend, everything else the deployed one.
/// A port suffix on the host is ignored.
pub fn resolve_api_base(host: &str) -> &'static str {
    let name = host.split(':').next().unwrap_or(host);
    if name == "localhost" || name == "127.0.0.1" {
        LOCAL_API_BASE
    } else {
        REMOTE_API_BASE
    }
}
