use crate::site::content::build::{cards, link_cards, para, section, tabs};
use crate::site::{Page, Route};

pub fn page() -> Page {
    Page {
        route: Route::Home,
        title: "Connect to the Future of Mobility".into(),
        lead: "The Velora Connected Vehicles API enables developers to build applications that \
               connect with millions of vehicles worldwide. Access vehicle data, control \
               features, and create the next generation of automotive experiences."
            .into(),
        sections: vec![
            section(
                "Why Choose the Velora Connected Vehicles API?",
                vec![
                    para(
                        "Built for developers, trusted by enterprises. The API provides the \
                         tools you need to create exceptional automotive experiences.",
                    ),
                    cards(&[
                        (
                            "Vehicle Data Access",
                            "Access real-time vehicle information including location, fuel \
                             level, battery status, and diagnostics.",
                        ),
                        (
                            "Secure & Compliant",
                            "Built with enterprise-grade security and compliance with \
                             automotive industry standards.",
                        ),
                        (
                            "Real-time Updates",
                            "Receive instant notifications through webhooks when vehicle \
                             status changes.",
                        ),
                        (
                            "Global Coverage",
                            "Support for Velora vehicles across North America, Europe, and \
                             other global markets.",
                        ),
                        (
                            "Developer-Friendly",
                            "Comprehensive SDKs, detailed documentation, and an interactive \
                             API explorer.",
                        ),
                        (
                            "Enterprise Ready",
                            "Scalable infrastructure with SLA guarantees and dedicated support.",
                        ),
                    ]),
                ],
            ),
            section(
                "Get Started in Minutes",
                vec![
                    para(
                        "Integrate vehicle data into your applications. Choose your preferred \
                         language and start building.",
                    ),
                    tabs(&[
                        ("javascript", "JavaScript", JS_QUICKSTART),
                        ("python", "Python", PY_QUICKSTART),
                        ("java", "Java", JAVA_QUICKSTART),
                        ("curl", "cURL", CURL_QUICKSTART),
                    ]),
                ],
            ),
            section(
                "Popular Use Cases",
                vec![cards(&[
                    (
                        "Fleet Management",
                        "Track and manage fleet vehicles with real-time location, maintenance \
                         alerts, and usage analytics.",
                    ),
                    (
                        "Insurance Telematics",
                        "Build usage-based insurance products with driving behavior data and \
                         risk assessment tools.",
                    ),
                    (
                        "Mobility Services",
                        "Create car-sharing, ride-hailing, and other mobility applications with \
                         vehicle control features.",
                    ),
                    (
                        "Smart Parking",
                        "Integrate with parking systems to provide automated parking payments \
                         and space management.",
                    ),
                ])],
            ),
            section(
                "Ready to Start Building?",
                vec![
                    para("Join thousands of developers building the future of connected mobility."),
                    link_cards(&[
                        (
                            "Start Building",
                            "Follow the quick start guide.",
                            Route::Quickstart,
                        ),
                        (
                            "API Reference",
                            "Browse every endpoint.",
                            Route::ApiReference,
                        ),
                        ("Contact Sales", "Talk to the team.", Route::Support),
                    ]),
                ],
            ),
        ],
    }
}

const JS_QUICKSTART: &str = r"const velora = require('@velora/connected-vehicles');

// Initialize the client
const client = new velora.Client({
  clientId: 'your-client-id',
  clientSecret: 'your-client-secret',
  environment: 'production' // or 'sandbox'
});

// Get vehicle information
async function getVehicleInfo(vehicleId) {
  try {
    const vehicle = await client.vehicles.get(vehicleId);
    console.log('Vehicle Info:', vehicle);

    // Get current location
    const location = await client.vehicles.location(vehicleId);
    console.log('Current Location:', location);

    return vehicle;
  } catch (error) {
    console.error('Error:', error);
  }
}";

const PY_QUICKSTART: &str = r#"from velora_cv import Client

# Initialize the client
client = Client(
    client_id='your-client-id',
    client_secret='your-client-secret',
    environment='production'  # or 'sandbox'
)

# Get vehicle information
def get_vehicle_info(vehicle_id):
    try:
        vehicle = client.vehicles.get(vehicle_id)
        print(f"Vehicle Info: {vehicle}")

        # Get current location
        location = client.vehicles.location(vehicle_id)
        print(f"Current Location: {location}")

        return vehicle
    except Exception as error:
        print(f"Error: {error}")"#;

const JAVA_QUICKSTART: &str = r#"import dev.velora.cv.Client;
import dev.velora.cv.models.Vehicle;
import dev.velora.cv.models.Location;

public class VeloraExample {
    private Client client;

    public VeloraExample() {
        // Initialize the client
        this.client = new Client.Builder()
            .clientId("your-client-id")
            .clientSecret("your-client-secret")
            .environment("production") // or "sandbox"
            .build();
    }

    public Vehicle getVehicleInfo(String vehicleId) {
        try {
            Vehicle vehicle = client.vehicles().get(vehicleId);
            System.out.println("Vehicle Info: " + vehicle);

            Location location = client.vehicles().location(vehicleId);
            System.out.println("Current Location: " + location);

            return vehicle;
        } catch (Exception error) {
            System.err.println("Error: " + error.getMessage());
            return null;
        }
    }
}"#;

const CURL_QUICKSTART: &str = r#"# Get access token
curl -X POST https://auth.velora.dev/oauth/token \
  -H "Content-Type: application/x-www-form-urlencoded" \
  -d "grant_type=client_credentials&client_id=YOUR_CLIENT_ID&client_secret=YOUR_CLIENT_SECRET"

# Get vehicle information
curl -X GET https://api.velora.dev/v1/vehicles/{vehicle_id} \
  -H "Authorization: Bearer YOUR_ACCESS_TOKEN" \
  -H "Accept: application/json""#;
