use crate::site::content::build::{bullets, callout, code, para, section, steps, table, tabs};
use crate::site::content::Tone;
use crate::site::{Page, Route};

pub fn page() -> Page {
    Page {
        route: Route::Webhooks,
        title: "Webhooks".into(),
        lead: "Receive real-time notifications about vehicle events and status changes. Webhooks \
               let your application react immediately to important vehicle events without \
               constantly polling the API."
            .into(),
        sections: vec![
            section(
                "How Webhooks Work",
                vec![
                    para(
                        "When a subscribed event occurs, Velora sends an HTTP POST request to \
                         your configured endpoint with the event data.",
                    ),
                    bullets(&[
                        "Real-time event delivery",
                        "Secure HMAC signature verification",
                        "Automatic retry mechanism",
                    ]),
                ],
            ),
            section(
                "Setting Up Webhooks",
                vec![
                    para(
                        "Create a webhook subscription to start receiving event notifications. \
                         You can subscribe to multiple event types with a single endpoint.",
                    ),
                    steps(&[
                        (
                            "Create Endpoint",
                            "Set up an HTTPS endpoint in your application to receive webhook events.",
                        ),
                        (
                            "Register Webhook",
                            "Register your endpoint URL and choose the events to subscribe to.",
                        ),
                        (
                            "Verify & Process",
                            "Verify each signature and process the events in your application.",
                        ),
                    ]),
                    tabs(&[
                        ("bash", "cURL", CURL_CREATE),
                        ("javascript", "JavaScript", JS_CREATE),
                        ("python", "Python", PY_CREATE),
                    ]),
                ],
            ),
            section(
                "Handling Webhook Events",
                vec![
                    para(
                        "Your endpoint must verify the X-Velora-Signature header before trusting \
                         an event, then respond with a 2xx status.",
                    ),
                    tabs(&[
                        ("javascript", "Node.js/Express", JS_HANDLER),
                        ("python", "Python/Flask", PY_HANDLER),
                    ]),
                ],
            ),
            section(
                "Event Payload",
                vec![code("json", Some("Example Event Payload"), EVENT_PAYLOAD)],
            ),
            section(
                "Available Events",
                vec![table(
                    &["Event", "Description", "Frequency"],
                    &[
                        &["vehicle.location.updated", "Triggered when vehicle location changes significantly", "Real-time"],
                        &["vehicle.fuel.low", "Triggered when fuel level drops below 15%", "Once per threshold"],
                        &["vehicle.fuel.empty", "Triggered when fuel level drops below 5%", "Once per threshold"],
                        &["vehicle.battery.low", "Triggered when battery level drops below 20% (EVs)", "Once per threshold"],
                        &["vehicle.maintenance.due", "Triggered when scheduled maintenance is due", "Daily check"],
                        &["vehicle.alarm.triggered", "Triggered when vehicle alarm is activated", "Real-time"],
                        &["vehicle.engine.started", "Triggered when engine is started", "Real-time"],
                        &["vehicle.engine.stopped", "Triggered when engine is stopped", "Real-time"],
                        &["vehicle.doors.locked", "Triggered when doors are locked", "Real-time"],
                        &["vehicle.doors.unlocked", "Triggered when doors are unlocked", "Real-time"],
                    ],
                )],
            ),
            section(
                "Delivery & Retries",
                vec![
                    callout(
                        Tone::Info,
                        "Retry Mechanism",
                        "Failed deliveries are retried up to 5 times with exponential backoff \
                         within a 24-hour window.",
                    ),
                    callout(
                        Tone::Warning,
                        "Respond Quickly",
                        "Acknowledge events within 10 seconds and process them asynchronously \
                         to avoid timeouts.",
                    ),
                ],
            ),
        ],
    }
}

const CURL_CREATE: &str = r#"curl -X POST https://api.velora.dev/v1/webhooks \
  -H "Authorization: Bearer YOUR_ACCESS_TOKEN" \
  -H "Content-Type: application/json" \
  -d '{
    "url": "https://your-app.com/webhooks/velora",
    "events": ["vehicle.location.updated", "vehicle.fuel.low"],
    "description": "Vehicle status notifications"
  }'"#;

const JS_CREATE: &str = r"const webhook = await fetch('https://api.velora.dev/v1/webhooks', {
  method: 'POST',
  headers: {
    'Authorization': 'Bearer YOUR_ACCESS_TOKEN',
    'Content-Type': 'application/json'
  },
  body: JSON.stringify({
    url: 'https://your-app.com/webhooks/velora',
    events: ['vehicle.location.updated', 'vehicle.fuel.low'],
    description: 'Vehicle status notifications'
  })
});

const result = await webhook.json();
console.log('Webhook created:', result);";

const PY_CREATE: &str = r"import requests

webhook_data = {
    'url': 'https://your-app.com/webhooks/velora',
    'events': ['vehicle.location.updated', 'vehicle.fuel.low'],
    'description': 'Vehicle status notifications'
}

response = requests.post(
    'https://api.velora.dev/v1/webhooks',
    headers={
        'Authorization': 'Bearer YOUR_ACCESS_TOKEN',
        'Content-Type': 'application/json'
    },
    json=webhook_data
)

print('Webhook created:', response.json())";

const JS_HANDLER: &str = r"const express = require('express');
const crypto = require('crypto');
const app = express();

app.use(express.json());

app.post('/webhooks/velora', (req, res) => {
  const signature = req.headers['x-velora-signature'];
  const payload = JSON.stringify(req.body);

  // Verify webhook signature
  const expectedSignature = crypto
    .createHmac('sha256', process.env.WEBHOOK_SECRET)
    .update(payload)
    .digest('hex');

  if (signature !== `sha256=${expectedSignature}`) {
    return res.status(401).send('Invalid signature');
  }

  const event = req.body;
  switch (event.type) {
    case 'vehicle.location.updated':
      handleLocationUpdate(event.data);
      break;
    case 'vehicle.fuel.low':
      handleLowFuel(event.data);
      break;
    default:
      console.log('Unhandled event type:', event.type);
  }

  res.status(200).send('OK');
});

app.listen(3000);";

const PY_HANDLER: &str = r#"from flask import Flask, request, jsonify
import hashlib
import hmac
import os

app = Flask(__name__)

@app.route('/webhooks/velora', methods=['POST'])
def handle_webhook():
    # Verify webhook signature
    signature = request.headers.get('X-Velora-Signature')
    payload = request.get_data()
    expected_signature = hmac.new(
        os.environ['WEBHOOK_SECRET'].encode(),
        payload,
        hashlib.sha256
    ).hexdigest()

    if signature != f'sha256={expected_signature}':
        return jsonify({'error': 'Invalid signature'}), 401

    event = request.json
    if event['type'] == 'vehicle.location.updated':
        handle_location_update(event['data'])
    elif event['type'] == 'vehicle.fuel.low':
        handle_low_fuel(event['data'])
    else:
        print(f'Unhandled event type: {event["type"]}')

    return jsonify({'status': 'success'}), 200"#;

const EVENT_PAYLOAD: &str = r#"{
  "id": "evt_550e8400-e29b-41d4-a716-446655440000",
  "type": "vehicle.location.updated",
  "created_at": "2023-12-07T10:30:00Z",
  "data": {
    "vehicle_id": "550e8400-e29b-41d4-a716-446655440000",
    "vin": "1HGBH41JXMN109186",
    "location": {
      "latitude": 40.7589,
      "longitude": -73.9851,
      "accuracy": 5.0,
      "timestamp": "2023-12-07T10:30:00Z"
    }
  }
}"#;
