use crate::site::content::build::{bullets, callout, numbered, para, section, steps, tabs};
use crate::site::content::Tone;
use crate::site::{Page, Route};

pub fn page() -> Page {
    Page {
        route: Route::Quickstart,
        title: "Quick Start Guide".into(),
        lead: "Get up and running with the Velora Connected Vehicles API in under 10 minutes. \
               This guide walks you through everything you need to make your first API call."
            .into(),
        sections: vec![
            section(
                "Prerequisites",
                vec![bullets(&[
                    "A Velora Developer account",
                    "Basic knowledge of REST APIs and HTTP requests",
                    "Development environment with Node.js, Python, Java, or cURL",
                ])],
            ),
            section(
                "Getting Started",
                vec![steps(&[
                    (
                        "Create Developer Account",
                        "Sign up for a Velora Developer account and create your first application.",
                    ),
                    (
                        "Get API Credentials",
                        "Obtain your client ID and client secret from the developer dashboard.",
                    ),
                    (
                        "Install SDK",
                        "Install the official Velora Connected Vehicles SDK for your preferred language.",
                    ),
                    (
                        "Authenticate",
                        "Initialize the client with your credentials and configure authentication.",
                    ),
                    (
                        "Make First Request",
                        "Fetch your first vehicle data and explore the API capabilities.",
                    ),
                ])],
            ),
            section(
                "Create Developer Account",
                vec![
                    para(
                        "First, create a developer account and register your application to get \
                         your API credentials.",
                    ),
                    numbered(&[
                        "Visit the Velora Developer Portal",
                        "Sign up for a new account or log in to your existing account",
                        "Create a new application in your dashboard",
                        "Choose your application type (Web, Mobile, or Server-to-Server)",
                        "Configure your application settings and scopes",
                    ]),
                ],
            ),
            section(
                "Install the SDK",
                vec![
                    para(
                        "Install the official Velora Connected Vehicles SDK for your preferred \
                         programming language.",
                    ),
                    tabs(&[
                        (
                            "bash",
                            "npm/yarn",
                            "# Install via npm\nnpm install @velora/connected-vehicles\n\n# Or install via yarn\nyarn add @velora/connected-vehicles",
                        ),
                        (
                            "bash",
                            "Python",
                            "# Install via pip\npip install velora-connected-vehicles\n\n# Or install via conda\nconda install -c velora velora-connected-vehicles",
                        ),
                        ("xml", "Maven", MAVEN),
                        (
                            "gradle",
                            "Gradle",
                            "implementation 'dev.velora:connected-vehicles:1.0.0'",
                        ),
                    ]),
                ],
            ),
            section(
                "Configure Authentication",
                vec![
                    para(
                        "Initialize the client with your API credentials. We recommend using \
                         environment variables to store your sensitive credentials.",
                    ),
                    callout(
                        Tone::Warning,
                        "Security Best Practice",
                        "Never hardcode your API credentials in your source code. Use environment \
                         variables or a secure configuration management system.",
                    ),
                    tabs(&[
                        ("javascript", "JavaScript", JS_AUTH),
                        ("python", "Python", PY_AUTH),
                    ]),
                ],
            ),
            section(
                "Make Your First Request",
                vec![
                    para(
                        "Now you're ready to make your first API request. Start by fetching the \
                         list of vehicles and getting some basic vehicle information.",
                    ),
                    tabs(&[
                        ("javascript", "JavaScript", JS_FIRST_REQUEST),
                        ("python", "Python", PY_FIRST_REQUEST),
                    ]),
                    callout(
                        Tone::Success,
                        "You're all set!",
                        "Explore the API reference to discover everything the API can do, or \
                         set up webhooks to receive real-time updates.",
                    ),
                ],
            ),
        ],
    }
}

const MAVEN: &str = "<dependency>
    <groupId>dev.velora</groupId>
    <artifactId>connected-vehicles</artifactId>
    <version>1.0.0</version>
</dependency>";

const JS_AUTH: &str = r"const velora = require('@velora/connected-vehicles');

const client = new velora.Client({
  clientId: process.env.VELORA_CLIENT_ID,
  clientSecret: process.env.VELORA_CLIENT_SECRET,
  environment: 'sandbox', // Use 'production' for live data
  scopes: ['vehicle:read', 'vehicle:location', 'vehicle:control']
});

// The client handles authentication automatically
console.log('Client initialized successfully');";

const PY_AUTH: &str = r#"import os
from velora_cv import Client

client = Client(
    client_id=os.environ['VELORA_CLIENT_ID'],
    client_secret=os.environ['VELORA_CLIENT_SECRET'],
    environment='sandbox',  # Use 'production' for live data
    scopes=['vehicle:read', 'vehicle:location', 'vehicle:control']
)

print("Client initialized successfully")"#;

const JS_FIRST_REQUEST: &str = r"// Get list of vehicles associated with the user
async function getVehicles() {
  try {
    const vehicles = await client.vehicles.list();
    console.log('Vehicles:', vehicles);

    if (vehicles.length > 0) {
      const vehicleId = vehicles[0].id;

      const vehicle = await client.vehicles.get(vehicleId);
      console.log('Vehicle details:', vehicle);

      const fuelStatus = await client.vehicles.fuel(vehicleId);
      console.log('Fuel status:', fuelStatus);
    }
  } catch (error) {
    console.error('Error:', error);
  }
}

getVehicles();";

const PY_FIRST_REQUEST: &str = r#"# Get list of vehicles associated with the user
def get_vehicles():
    try:
        vehicles = client.vehicles.list()
        print(f"Vehicles: {vehicles}")

        if vehicles:
            vehicle_id = vehicles[0]['id']

            vehicle = client.vehicles.get(vehicle_id)
            print(f"Vehicle details: {vehicle}")

            fuel_status = client.vehicles.fuel(vehicle_id)
            print(f"Fuel status: {fuel_status}")
    except Exception as error:
        print(f"Error: {error}")

get_vehicles()"#;
