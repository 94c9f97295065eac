use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use constants::palette::{PALETTE, palette_name};
use particle_cloud::{InteractionMode, ShapeKind};
use serde::{Deserialize, Serialize};

use crate::engine::cloud::CloudState;
use crate::engine::motion::sensor::MotionSensor;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC error structure following specification.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication between the page and Bevy.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing WebRPC communication layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe message queue for cross-thread communication.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        // Filter messages to ensure they contain string data.
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            // Attempt JSON parsing to validate RPC format before queuing.
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        window
            .add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            .expect("Failed to register message listener");
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing incoming RPC message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut state: ResMut<CloudState>,
    mut sensor: ResMut<MotionSensor>,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                if let Some(response) =
                    handle_rpc_request(&request, &diagnostics, &mut state, &mut sensor)
                {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                // The pointer and frame streams are far too chatty to echo
                // wholesale; only malformed traffic is surfaced.
                rpc_interface.send_notification(
                    "debug_message",
                    serde_json::json!({
                        "message": format!("Parse error: {}", parse_error)
                    }),
                );
            }
        }
    }
}

/// Handle individual RPC request and generate response based on method.
///
/// Side effects run whether or not the request carries an ID. The pointer
/// and motion streams arrive as ID-less notifications and only skip the
/// response.
fn handle_rpc_request(
    request: &RpcRequest,
    diagnostics: &DiagnosticsStore,
    state: &mut CloudState,
    sensor: &mut MotionSensor,
) -> Option<RpcResponse> {
    let result = match request.method.as_str() {
        "set_shape" => handle_set_shape(&request.params, state),
        "set_colour_index" => handle_set_colour_index(&request.params, state),
        "set_interaction_mode" => handle_set_interaction_mode(&request.params, state, sensor),
        "pointer_position" => handle_pointer_position(&request.params, state),
        "motion_frame" => handle_motion_frame(&request.params, state, sensor),
        "get_fps" => handle_get_fps(diagnostics),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            let id = request.id.clone()?;
            return Some(create_error_response(
                id,
                -32601,
                "Method not found",
                Some(serde_json::json!({"method": request.method})),
            ));
        }
    };

    // Only generate responses for requests with IDs (notifications have no ID).
    let id = request.id.clone()?;

    match result {
        Ok(result_value) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        }),
        Err(error) => Some(RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        }),
    }
}

/// Handle shape selection with parameter validation.
fn handle_set_shape(
    params: &serde_json::Value,
    state: &mut CloudState,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct SetShapeParams {
        shape: ShapeKind,
    }

    let shape_params = serde_json::from_value::<SetShapeParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'shape' parameter"))?;

    state
        .engine
        .retarget(shape_params.shape)
        .map_err(|error| RpcError::internal_error(&error.to_string()))?;

    info!("Shape selected over RPC: {}", shape_params.shape.label());

    Ok(serde_json::json!({
        "success": true,
        "shape": shape_params.shape
    }))
}

/// Handle palette selection; out-of-range indices wrap.
fn handle_set_colour_index(
    params: &serde_json::Value,
    state: &mut CloudState,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct SetColourParams {
        index: usize,
    }

    let colour_params = serde_json::from_value::<SetColourParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'index' parameter"))?;

    state.colour_index = colour_params.index % PALETTE.len();

    Ok(serde_json::json!({
        "success": true,
        "index": state.colour_index,
        "name": palette_name(state.colour_index)
    }))
}

/// Handle interaction mode switching with estimator rebaseline.
fn handle_set_interaction_mode(
    params: &serde_json::Value,
    state: &mut CloudState,
    sensor: &mut MotionSensor,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct SetModeParams {
        mode: InteractionMode,
    }

    let mode_params = serde_json::from_value::<SetModeParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'mode' of 'pointer' or 'motion'"))?;

    if state.mode != mode_params.mode {
        // A stale baseline frame would spike the energy on re-entry.
        sensor.reset();
        state.mode = mode_params.mode;
        info!("Interaction mode set over RPC: {}", state.mode.label());
    }

    Ok(serde_json::json!({
        "success": true,
        "mode": state.mode
    }))
}

/// Store the streamed pointer position for the next advance.
fn handle_pointer_position(
    params: &serde_json::Value,
    state: &mut CloudState,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct PointerParams {
        x: f32,
        width: f32,
    }

    let pointer = serde_json::from_value::<PointerParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'x' and 'width' parameters"))?;

    state.pointer_x = pointer.x;
    state.window_width = pointer.width;

    Ok(serde_json::json!({ "success": true }))
}

/// Feed one camera raster from the page into the motion estimator.
///
/// The page's capture loop races the mode switch, so a frame arriving
/// after the switch away from Motion is dropped without touching the
/// estimator.
fn handle_motion_frame(
    params: &serde_json::Value,
    state: &CloudState,
    sensor: &mut MotionSensor,
) -> Result<serde_json::Value, RpcError> {
    #[derive(serde::Deserialize)]
    struct MotionFrameParams {
        frame: Vec<u8>,
    }

    let frame_params = serde_json::from_value::<MotionFrameParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'frame' byte array"))?;

    if state.mode != InteractionMode::Motion {
        return Ok(serde_json::json!({ "energy": sensor.energy() }));
    }

    let energy = sensor
        .estimator
        .sample(&frame_params.frame)
        .map_err(|error| RpcError::invalid_params(&error.to_string()))?;

    Ok(serde_json::json!({ "energy": energy }))
}

/// Handle FPS retrieval with diagnostic system integration.
fn handle_get_fps(diagnostics: &DiagnosticsStore) -> Result<serde_json::Value, RpcError> {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps_diagnostic| fps_diagnostic.smoothed())
        .unwrap_or(0.0) as f32;

    Ok(serde_json::json!({
        "fps": fps
    }))
}

/// Create standardized error response with optional data payload.
fn create_error_response(
    id: serde_json::Value,
    code: i32,
    message: &str,
    data: Option<serde_json::Value>,
) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window (host page).
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}
