use crate::site::content::build::{examples_of, para, section, table};
use crate::site::content::{Block, Endpoint, Method, Parameter};
use crate::site::{Page, Route};

fn endpoint(method: Method, path: &str, summary: &str, response: &str) -> Endpoint {
    Endpoint {
        method,
        path: path.to_string(),
        summary: summary.to_string(),
        parameters: Vec::new(),
        request_body: None,
        response: response.to_string(),
        examples: Vec::new(),
    }
}

fn vehicle_id() -> Parameter {
    Parameter {
        name: "vehicle_id".into(),
        kind: "string".into(),
        required: true,
        description: "Unique identifier for the vehicle".into(),
    }
}

pub fn page() -> Page {
    let list_vehicles = Endpoint {
        examples: examples_of(&[
            ("bash", "cURL", CURL_LIST),
            ("javascript", "JavaScript", JS_LIST),
        ]),
        ..endpoint(
            Method::Get,
            "/v1/vehicles",
            "List all vehicles associated with the authenticated user",
            LIST_RESPONSE,
        )
    };
    let get_vehicle = Endpoint {
        parameters: vec![vehicle_id()],
        ..endpoint(
            Method::Get,
            "/v1/vehicles/{vehicle_id}",
            "Get detailed information about a specific vehicle",
            VEHICLE_RESPONSE,
        )
    };
    let location = Endpoint {
        parameters: vec![vehicle_id()],
        examples: examples_of(&[("bash", "cURL", CURL_LOCATION)]),
        ..endpoint(
            Method::Get,
            "/v1/vehicles/{vehicle_id}/location",
            "Get current location of a vehicle",
            LOCATION_RESPONSE,
        )
    };
    let engine_start = Endpoint {
        parameters: vec![vehicle_id()],
        request_body: Some(ENGINE_START_BODY.to_string()),
        ..endpoint(
            Method::Post,
            "/v1/vehicles/{vehicle_id}/engine/start",
            "Start vehicle engine remotely",
            ENGINE_START_RESPONSE,
        )
    };

    Page {
        route: Route::ApiReference,
        title: "API Reference".into(),
        lead: "Complete reference documentation for all Velora Connected Vehicles API \
               endpoints, including request and response examples, parameters, and error codes."
            .into(),
        sections: vec![
            section(
                "Base URL",
                vec![table(
                    &["Environment", "URL"],
                    &[
                        &["Production", "https://api.velora.dev"],
                        &["Sandbox", "https://api-sandbox.velora.dev"],
                    ],
                )],
            ),
            section(
                "Vehicles",
                vec![
                    para("Manage and retrieve vehicle information."),
                    Block::Endpoint(list_vehicles),
                    Block::Endpoint(get_vehicle),
                ],
            ),
            section(
                "Location",
                vec![
                    para("Access vehicle location and tracking data."),
                    Block::Endpoint(location),
                ],
            ),
            section(
                "Fuel & Battery",
                vec![
                    para("Monitor fuel levels and battery status."),
                    Block::Endpoint(endpoint(
                        Method::Get,
                        "/v1/vehicles/{vehicle_id}/fuel",
                        "Get fuel level and range information",
                        FUEL_RESPONSE,
                    )),
                    Block::Endpoint(endpoint(
                        Method::Get,
                        "/v1/vehicles/{vehicle_id}/battery",
                        "Get battery status for electric and hybrid vehicles",
                        BATTERY_RESPONSE,
                    )),
                ],
            ),
            section(
                "Vehicle Control",
                vec![
                    para("Control vehicle functions remotely."),
                    Block::Endpoint(endpoint(
                        Method::Post,
                        "/v1/vehicles/{vehicle_id}/doors/lock",
                        "Lock vehicle doors",
                        LOCK_RESPONSE,
                    )),
                    Block::Endpoint(endpoint(
                        Method::Post,
                        "/v1/vehicles/{vehicle_id}/doors/unlock",
                        "Unlock vehicle doors",
                        UNLOCK_RESPONSE,
                    )),
                    Block::Endpoint(engine_start),
                ],
            ),
            section(
                "HTTP Status Codes",
                vec![table(
                    &["Code", "Description"],
                    &[
                        &["200", "Success - Request completed successfully"],
                        &["201", "Created - Resource created successfully"],
                        &["400", "Bad Request - Invalid request parameters"],
                        &["401", "Unauthorized - Invalid or missing authentication"],
                        &["403", "Forbidden - Insufficient permissions"],
                        &["404", "Not Found - Resource not found"],
                        &["429", "Too Many Requests - Rate limit exceeded"],
                        &["500", "Internal Server Error - Server error occurred"],
                    ],
                )],
            ),
            section(
                "Rate Limits",
                vec![table(
                    &["Endpoint", "Limit"],
                    &[
                        &["Vehicle Information", "100 requests/minute"],
                        &["Location Data", "60 requests/minute"],
                        &["Vehicle Control", "10 requests/minute"],
                        &["Fuel/Battery Status", "30 requests/minute"],
                    ],
                )],
            ),
        ],
    }
}

const LIST_RESPONSE: &str = r#"{
  "vehicles": [
    {
      "id": "550e8400-e29b-41d4-a716-446655440000",
      "vin": "1HGBH41JXMN109186",
      "make": "Velora",
      "model": "Ridgeline",
      "year": 2023,
      "color": "Red",
      "status": "active",
      "last_seen": "2023-12-07T10:30:00Z"
    }
  ],
  "total": 1,
  "page": 1,
  "per_page": 10
}"#;

const CURL_LIST: &str = r#"curl -X GET https://api.velora.dev/v1/vehicles \
  -H "Authorization: Bearer YOUR_ACCESS_TOKEN" \
  -H "Accept: application/json""#;

const JS_LIST: &str = r"const response = await fetch('https://api.velora.dev/v1/vehicles', {
  headers: {
    'Authorization': 'Bearer YOUR_ACCESS_TOKEN',
    'Accept': 'application/json'
  }
});

const vehicles = await response.json();
console.log(vehicles);";

const VEHICLE_RESPONSE: &str = r#"{
  "id": "550e8400-e29b-41d4-a716-446655440000",
  "vin": "1HGBH41JXMN109186",
  "make": "Velora",
  "model": "Ridgeline",
  "year": 2023,
  "mileage": 15420,
  "fuel_type": "gasoline",
  "drivetrain": "4WD",
  "status": "active",
  "last_seen": "2023-12-07T10:30:00Z",
  "features": ["remote_start", "climate_control", "door_locks"]
}"#;

const LOCATION_RESPONSE: &str = r#"{
  "latitude": 40.7589,
  "longitude": -73.9851,
  "accuracy": 5.0,
  "heading": 180.0,
  "speed": 0.0,
  "address": {
    "street": "123 Main St",
    "city": "New York",
    "country": "US"
  },
  "timestamp": "2023-12-07T10:30:00Z"
}"#;

const CURL_LOCATION: &str = r#"curl -X GET https://api.velora.dev/v1/vehicles/550e8400-e29b-41d4-a716-446655440000/location \
  -H "Authorization: Bearer YOUR_ACCESS_TOKEN" \
  -H "Accept: application/json""#;

const FUEL_RESPONSE: &str = r#"{
  "fuel_level": 75.5,
  "fuel_level_percentage": 85,
  "range": 420,
  "fuel_type": "gasoline",
  "tank_capacity": 22.5,
  "timestamp": "2023-12-07T10:30:00Z"
}"#;

const BATTERY_RESPONSE: &str = r#"{
  "battery_level": 85.2,
  "battery_percentage": 85,
  "charging_status": "not_charging",
  "range_electric": 280,
  "range_total": 450,
  "time_to_full_charge": null,
  "plug_status": "unplugged",
  "timestamp": "2023-12-07T10:30:00Z"
}"#;

const LOCK_RESPONSE: &str = r#"{
  "command_id": "cmd_550e8400-e29b-41d4-a716-446655440000",
  "status": "pending",
  "timestamp": "2023-12-07T10:30:00Z"
}"#;

const UNLOCK_RESPONSE: &str = r#"{
  "command_id": "cmd_550e8400-e29b-41d4-a716-446655440001",
  "status": "pending",
  "timestamp": "2023-12-07T10:30:00Z"
}"#;

const ENGINE_START_BODY: &str = r#"{
  "duration": 600,
  "climate_settings": {
    "temperature": 72,
    "defrost": false
  }
}"#;

const ENGINE_START_RESPONSE: &str = r#"{
  "command_id": "cmd_550e8400-e29b-41d4-a716-446655440002",
  "status": "pending",
  "estimated_completion": "2023-12-07T10:31:00Z"
}"#;
