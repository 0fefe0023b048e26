use crate::site::content::build::{callout, code, para, section, steps, table, tabs};
use crate::site::content::Tone;
use crate::site::{Page, Route};

pub fn page() -> Page {
    Page {
        route: Route::Authentication,
        title: "Authentication & Authorization".into(),
        lead: "Learn how to authenticate with the Velora Connected Vehicles API using OAuth 2.0, \
               manage access tokens, and implement secure authentication in your applications."
            .into(),
        sections: vec![
            section(
                "OAuth 2.0 Authentication",
                vec![para(
                    "The API uses OAuth 2.0 with the Client Credentials flow for \
                     server-to-server authentication. This ensures secure access to vehicle \
                     data while maintaining user privacy and data protection standards.",
                )],
            ),
            section(
                "Client Credentials Flow",
                vec![
                    para(
                        "The Client Credentials flow is designed for server-to-server \
                         communication where your application accesses resources on behalf of \
                         itself, not a specific user.",
                    ),
                    steps(&[
                        (
                            "Request Token",
                            "Send your client credentials to the token endpoint to request an \
                             access token.",
                        ),
                        (
                            "Receive Token",
                            "The authorization server validates your credentials and returns \
                             an access token.",
                        ),
                        (
                            "Use Token",
                            "Include the access token in the Authorization header of your API \
                             requests.",
                        ),
                    ]),
                ],
            ),
            section(
                "Getting an Access Token",
                vec![
                    para(
                        "To obtain an access token, make a POST request to the token endpoint \
                         with your client credentials.",
                    ),
                    tabs(&[
                        ("bash", "cURL", CURL_TOKEN),
                        ("javascript", "JavaScript", JS_TOKEN),
                        ("python", "Python", PY_TOKEN),
                    ]),
                    code("json", Some("Response Format"), TOKEN_RESPONSE),
                ],
            ),
            section(
                "Using the Access Token",
                vec![
                    para(
                        "Include the access token in the Authorization header of your API \
                         requests using the Bearer token format.",
                    ),
                    tabs(&[
                        ("bash", "cURL", CURL_CALL),
                        ("javascript", "JavaScript", JS_CALL),
                        ("python", "Python", PY_CALL),
                    ]),
                ],
            ),
            section(
                "Available Scopes",
                vec![
                    para(
                        "Scopes define the level of access your application has to vehicle \
                         data. Request only the scopes your application needs.",
                    ),
                    table(
                        &["Scope", "Description"],
                        &[
                            &[
                                "vehicle:read",
                                "Read basic vehicle information including VIN, make, model, year, and status",
                            ],
                            &[
                                "vehicle:location",
                                "Access vehicle location data including GPS coordinates and address",
                            ],
                            &[
                                "vehicle:control",
                                "Control vehicle functions like lock/unlock, engine start/stop, and climate",
                            ],
                            &[
                                "vehicle:fuel",
                                "Read fuel level, battery status, and range information",
                            ],
                            &[
                                "vehicle:diagnostics",
                                "Access diagnostic data including odometer, maintenance alerts, and DTCs",
                            ],
                            &[
                                "vehicle:history",
                                "Access historical trip data and usage analytics",
                            ],
                        ],
                    ),
                ],
            ),
            section(
                "Security Best Practices",
                vec![
                    callout(
                        Tone::Warning,
                        "Credential Management",
                        "Store client secrets in environment variables or a secrets manager and \
                         rotate them regularly.",
                    ),
                    callout(
                        Tone::Info,
                        "Token Management",
                        "Cache access tokens until shortly before expiry and refresh them \
                         proactively.",
                    ),
                    callout(
                        Tone::Info,
                        "Network Security",
                        "Always use HTTPS and validate TLS certificates.",
                    ),
                ],
            ),
            section(
                "Error Handling",
                vec![
                    table(
                        &["Status", "Error", "Meaning"],
                        &[
                            &["401", "invalid_token", "The access token is missing, expired, or malformed"],
                            &["401", "invalid_client", "The client credentials are wrong"],
                            &["403", "insufficient_scope", "The token lacks a required scope"],
                        ],
                    ),
                    code("javascript", Some("Error Handling Example"), JS_ERRORS),
                ],
            ),
        ],
    }
}

const CURL_TOKEN: &str = r#"curl -X POST https://auth.velora.dev/oauth/token \
  -H "Content-Type: application/x-www-form-urlencoded" \
  -d "grant_type=client_credentials" \
  -d "client_id=YOUR_CLIENT_ID" \
  -d "client_secret=YOUR_CLIENT_SECRET" \
  -d "scope=vehicle:read vehicle:location vehicle:control""#;

const JS_TOKEN: &str = r"const getAccessToken = async () => {
  const response = await fetch('https://auth.velora.dev/oauth/token', {
    method: 'POST',
    headers: {
      'Content-Type': 'application/x-www-form-urlencoded',
    },
    body: new URLSearchParams({
      grant_type: 'client_credentials',
      client_id: process.env.VELORA_CLIENT_ID,
      client_secret: process.env.VELORA_CLIENT_SECRET,
      scope: 'vehicle:read vehicle:location vehicle:control'
    })
  });

  const data = await response.json();
  return data.access_token;
};";

const PY_TOKEN: &str = r"import requests
import os

def get_access_token():
    url = 'https://auth.velora.dev/oauth/token'
    data = {
        'grant_type': 'client_credentials',
        'client_id': os.environ['VELORA_CLIENT_ID'],
        'client_secret': os.environ['VELORA_CLIENT_SECRET'],
        'scope': 'vehicle:read vehicle:location vehicle:control'
    }

    response = requests.post(url, data=data)
    response.raise_for_status()
    return response.json()['access_token']";

const TOKEN_RESPONSE: &str = r#"{
  "access_token": "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9...",
  "token_type": "Bearer",
  "expires_in": 3600,
  "refresh_token": "def50200a1b2c3d4e5f6...",
  "scope": "vehicle:read vehicle:location vehicle:control"
}"#;

const CURL_CALL: &str = r#"# Using the access token in API calls
curl -X GET https://api.velora.dev/v1/vehicles \
  -H "Authorization: Bearer YOUR_ACCESS_TOKEN" \
  -H "Accept: application/json""#;

const JS_CALL: &str = r"const makeApiCall = async (accessToken) => {
  const response = await fetch('https://api.velora.dev/v1/vehicles', {
    headers: {
      'Authorization': `Bearer ${accessToken}`,
      'Accept': 'application/json'
    }
  });

  if (!response.ok) {
    throw new Error(`HTTP error! status: ${response.status}`);
  }

  return await response.json();
};";

const PY_CALL: &str = r"import requests

def make_api_call(access_token):
    url = 'https://api.velora.dev/v1/vehicles'
    headers = {
        'Authorization': f'Bearer {access_token}',
        'Accept': 'application/json'
    }

    response = requests.get(url, headers=headers)
    response.raise_for_status()
    return response.json()";

const JS_ERRORS: &str = r"// Example error handling in JavaScript
const makeAuthenticatedRequest = async () => {
  try {
    const response = await fetch('https://api.velora.dev/v1/vehicles', {
      headers: {
        'Authorization': `Bearer ${accessToken}`,
        'Accept': 'application/json'
      }
    });

    if (response.status === 401) {
      // Token expired, refresh and retry
      accessToken = await refreshAccessToken();
      return await makeAuthenticatedRequest();
    }

    if (!response.ok) {
      throw new Error(`API Error: ${response.status} ${response.statusText}`);
    }

    return await response.json();
  } catch (error) {
    console.error('Request failed:', error);
    throw error;
  }
};";
