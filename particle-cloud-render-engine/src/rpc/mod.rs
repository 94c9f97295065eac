//! JSON-RPC 2.0 communication layer for host page integration.
//!
//! Implements bidirectional messaging between the Bevy engine and the
//! embedding page via iframe postMessage, supporting both request-response
//! and notification patterns.
//!
//! ## Architecture
//!
//! The RPC system uses standard JSON-RPC 2.0 protocol with:
//! - **Requests**: Expect responses with matching IDs
//! - **Notifications**: One-way messages without responses
//! - **Responses**: Reply to requests with results or errors
//!
//! ## Message Flow
//!
//! ```text
//! Host page (Parent Window)  <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Process request
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        ├─ Stream (no ID) ─────────────────────> │
//!        │ <────────── Notification (no ID) ──────┤
//! ```
//!
//! The pointer and camera-frame streams are sent without IDs at input
//! cadence; their side effects apply exactly like ID-carrying requests,
//! the engine just skips the response.
//!
//! ## Adding New RPC Methods
//!
//! Add a method case in `handle_rpc_request()`:
//!
//! ```rust,ignore
//! let result = match request.method.as_str() {
//!     "your_method_name" => handle_your_method(&request.params, ...),
//!     // ... existing methods
//! };
//! ```
//!
//! then implement the handler:
//!
//! ```rust,ignore
//! fn handle_your_method(
//!     params: &Value,
//!     // ... required resources
//! ) -> Result<Value, RpcError> {
//!     #[derive(Deserialize)]
//!     struct YourParams {
//!         field: String,
//!     }
//!
//!     let parsed = serde_json::from_value::<YourParams>(params.clone())
//!         .map_err(|_| RpcError::invalid_params("Expected 'field' parameter"))?;
//!
//!     // Process logic here
//!
//!     Ok(json!({ "success": true }))
//! }
//! ```
//!
//! ## Sending Notifications from Bevy
//!
//! Use `WebRpcInterface::send_notification()` to push updates to the page:
//!
//! ```rust,ignore
//! fn your_system(mut rpc: ResMut<WebRpcInterface>) {
//!     rpc.send_notification("event_name", json!({
//!         "data": "value"
//!     }));
//! }
//! ```
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32600`: Invalid request
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error
//!
//! ## Existing Methods
//!
//! ### Cloud Control
//! - `set_shape`: Morph toward a named shape (`heart`, `flower`, `saturn`,
//!   `buddha`, `fireworks`)
//! - `set_colour_index`: Pick a palette colour by index (wraps)
//! - `set_interaction_mode`: Switch between `pointer` and `motion` input
//!
//! ### Input Streams
//! - `pointer_position`: Horizontal cursor position plus page width
//! - `motion_frame`: One 64x48 RGBA raster from the page-owned camera
//!
//! ### Diagnostics
//! - `get_fps`: Retrieve current frame rate
//!
//! ### Outgoing Notifications
//! - `fps_update`: Smoothed frame rate, every half second
//! - `disturbance_update`: Disturbance, scatter, and active mode, every
//!   half second
//! - `debug_message`: Parse failures on incoming traffic

/// JSON-RPC 2.0 bidirectional communication system for host page integration.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
