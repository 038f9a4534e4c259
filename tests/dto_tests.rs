use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use zabbix_rs::dto::{
    DiscoveryRuleUpdateResult, HistoryRecord, Host, ItemUpdateResult, JsonRpcRequest,
    JsonRpcResponse, LoginParams, RpcError, JSONRPC_VERSION,
};

#[test]
fn test_request_envelope_round_trip() {
    let request = JsonRpcRequest::new("host.get", json!({ "output": "extend" }), None, 7);
    let encoded = serde_json::to_string(&request).unwrap();
    let decoded: JsonRpcRequest<Value> = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded.jsonrpc, JSONRPC_VERSION);
    assert_eq!(decoded.method, "host.get");
    assert_eq!(decoded.params, json!({ "output": "extend" }));
    assert_eq!(decoded.id, 7);
}

#[test]
fn test_request_envelope_omits_empty_auth() {
    let request = JsonRpcRequest::new("user.login", json!({}), None, 1);
    let encoded = serde_json::to_value(&request).unwrap();

    assert!(encoded.get("auth").is_none());
    assert_eq!(encoded["jsonrpc"], "2.0");
    assert_eq!(encoded["id"], 1);
}

#[test]
fn test_request_envelope_serializes_auth_when_present() {
    let request = JsonRpcRequest::new("host.get", json!({}), Some("tok123".to_string()), 2);
    let encoded = serde_json::to_value(&request).unwrap();

    assert_eq!(encoded["auth"], "tok123");
}

#[test]
fn test_login_params_wire_shape() {
    let params = LoginParams {
        user: "Admin".to_string(),
        password: "zabbix".to_string(),
    };
    let encoded = serde_json::to_value(&params).unwrap();
    assert_eq!(encoded, json!({ "user": "Admin", "password": "zabbix" }));
}

#[test]
fn test_response_envelope_with_error() {
    let body = r#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Invalid params.","data":"Not authorised."},"id":3}"#;
    let response: JsonRpcResponse<Value> = serde_json::from_str(body).unwrap();

    let err = response.api_error().unwrap();
    assert_eq!(err.code, -32602);
    assert_eq!(err.message, "Invalid params.");
    assert_eq!(err.data, "Not authorised.");
    assert_eq!(response.id, 3);
}

#[test]
fn test_response_envelope_code_zero_is_not_an_error() {
    let body = r#"{"jsonrpc":"2.0","error":{"code":0},"result":"tok123","id":1}"#;
    let response: JsonRpcResponse<String> = serde_json::from_str(body).unwrap();

    assert!(response.api_error().is_none());
    assert_eq!(response.into_result().unwrap(), "tok123");
}

#[test]
fn test_into_result_on_error_envelope() {
    let body = r#"{"jsonrpc":"2.0","error":{"code":-1,"message":"bad creds","data":"d"},"id":1}"#;
    let response: JsonRpcResponse<String> = serde_json::from_str(body).unwrap();

    let err = response.into_result().unwrap_err();
    let api_err = err.as_api_error().unwrap();
    assert_eq!(
        *api_err,
        RpcError {
            code: -1,
            message: "bad creds".to_string(),
            data: "d".to_string(),
        }
    );
}

#[test]
fn test_rpc_error_display() {
    let err = RpcError {
        code: -32500,
        message: "Application error.".to_string(),
        data: "No permissions to referred object.".to_string(),
    };
    let rendered = err.to_string();
    assert!(rendered.contains("-32500"));
    assert!(rendered.contains("Application error."));
    assert!(rendered.contains("No permissions to referred object."));
}

#[test]
fn test_host_from_api_shape() {
    let body = r#"{"hostid":"10084","host":"zabbix-server","name":"Zabbix server","status":"0"}"#;
    let host: Host = serde_json::from_str(body).unwrap();
    assert_eq!(host.hostid, "10084");
    assert_eq!(host.host, "zabbix-server");
    assert_eq!(host.status, "0");
}

#[test]
fn test_history_record_from_api_shape() {
    let body = r#"{"itemid":"23296","clock":"1351090996","value":"0.085","ns":"563157632"}"#;
    let record: HistoryRecord = serde_json::from_str(body).unwrap();
    assert_eq!(record.itemid, "23296");
    assert_eq!(record.clock, "1351090996");
    assert_eq!(record.value, "0.085");
}

#[test]
fn test_update_acks_from_api_shape() {
    let items: ItemUpdateResult = serde_json::from_str(r#"{"itemids":["23296","23297"]}"#).unwrap();
    assert_eq!(items.itemids, vec!["23296", "23297"]);

    let rules: DiscoveryRuleUpdateResult =
        serde_json::from_str(r#"{"ruleids":["27425"]}"#).unwrap();
    assert_eq!(rules.ruleids, vec!["27425"]);
}
