use crate::site::content::build::{bullets, code, para, section, table, tabs};
use crate::site::content::Section;
use crate::site::{Page, Route};

struct Sdk {
    language: &'static str,
    package: &'static str,
    version: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    install: &'static str,
    grammar: &'static str,
    examples: &'static [(&'static str, &'static str)],
}

impl Sdk {
    fn section(&self) -> Section {
        let examples: Vec<_> = self
            .examples
            .iter()
            .map(|(title, source)| (self.grammar, *title, *source))
            .collect();

        section(
            self.language,
            vec![
                para(self.description),
                table(
                    &["Package", "Version"],
                    &[&[self.package, self.version]],
                ),
                bullets(self.features),
                code("bash", Some("Installation"), self.install),
                tabs(&examples),
            ],
        )
    }
}

const OFFICIAL: &[Sdk] = &[
    Sdk {
        language: "JavaScript/TypeScript",
        package: "@velora/connected-vehicles",
        version: "v2.1.0",
        description: "Official SDK for Node.js and browser environments with full TypeScript support.",
        features: &["Promise-based API", "TypeScript definitions", "Automatic token refresh", "Webhook helpers"],
        install: "npm install @velora/connected-vehicles",
        grammar: "javascript",
        examples: &[("Basic Usage", JS_BASIC), ("Webhook Integration", JS_WEBHOOK)],
    },
    Sdk {
        language: "Python",
        package: "velora-connected-vehicles",
        version: "v1.5.2",
        description: "Python SDK with support for async/await and comprehensive error handling.",
        features: &["Async support", "Pydantic models", "Comprehensive logging", "Rate limiting"],
        install: "pip install velora-connected-vehicles",
        grammar: "python",
        examples: &[("Synchronous Usage", PY_SYNC), ("Async Usage", PY_ASYNC)],
    },
    Sdk {
        language: "Java",
        package: "dev.velora:connected-vehicles",
        version: "v1.3.1",
        description: "Java SDK with builder pattern and comprehensive exception handling.",
        features: &["Builder pattern", "Custom exceptions", "Thread-safe"],
        install: "implementation \"dev.velora:connected-vehicles:1.3.1\"",
        grammar: "java",
        examples: &[("Error Handling", JAVA_ERRORS)],
    },
    Sdk {
        language: "Go",
        package: "github.com/velora/connected-vehicles-go",
        version: "v0.8.0",
        description: "Go SDK with context support and structured error handling.",
        features: &["Context support", "Structured errors", "HTTP client wrapper"],
        install: "go get github.com/velora/connected-vehicles-go",
        grammar: "go",
        examples: &[("Basic Usage", GO_BASIC)],
    },
    Sdk {
        language: "PHP",
        package: "velora/connected-vehicles",
        version: "v1.2.0",
        description: "PHP SDK with PSR-4 autoloading and comprehensive documentation.",
        features: &["PSR-4 autoloading", "Guzzle HTTP client", "Laravel integration"],
        install: "composer require velora/connected-vehicles",
        grammar: "php",
        examples: &[("Basic Usage", PHP_BASIC)],
    },
];

pub fn page() -> Page {
    let mut sections = vec![section(
        "Official SDKs",
        vec![para(
            "Official SDKs handle authentication, retries, and response parsing so you can \
             focus on your application.",
        )],
    )];
    sections.extend(OFFICIAL.iter().map(Sdk::section));
    sections.push(section(
        "Community SDKs",
        vec![table(
            &["Name", "Description"],
            &[
                &["Ruby SDK", "Unofficial Ruby gem for the Velora Connected Vehicles API"],
                &["C# SDK", "Unofficial .NET SDK with async/await support"],
                &["Rust SDK", "Unofficial Rust crate with type-safe API bindings"],
            ],
        )],
    ));

    Page {
        route: Route::Sdks,
        title: "SDKs & Libraries".into(),
        lead: "Official and community-maintained libraries for integrating with the Velora \
               Connected Vehicles API in your language of choice."
            .into(),
        sections,
    }
}

const JS_BASIC: &str = r"import { VeloraClient } from '@velora/connected-vehicles';

const client = new VeloraClient({
  clientId: process.env.VELORA_CLIENT_ID,
  clientSecret: process.env.VELORA_CLIENT_SECRET,
  environment: 'production'
});

// Get vehicle list
const vehicles = await client.vehicles.list();

// Lock vehicle doors
const result = await client.vehicles.lockDoors(vehicleId);";

const JS_WEBHOOK: &str = r"import { verifyWebhookSignature } from '@velora/connected-vehicles';

app.post('/webhook', (req, res) => {
  const signature = req.headers['x-velora-signature'];
  const isValid = verifyWebhookSignature(
    req.body,
    signature,
    process.env.WEBHOOK_SECRET
  );

  if (!isValid) {
    return res.status(401).send('Invalid signature');
  }

  handleWebhookEvent(req.body);
  res.status(200).send('OK');
});";

const PY_SYNC: &str = r"from velora_cv import Client

client = Client(
    client_id=os.environ['VELORA_CLIENT_ID'],
    client_secret=os.environ['VELORA_CLIENT_SECRET'],
    environment='production'
)

# Get vehicle list
vehicles = client.vehicles.list()

# Start engine remotely
result = client.vehicles.start_engine(vehicle_id, duration=600)";

const PY_ASYNC: &str = r"import asyncio
from velora_cv import AsyncClient

async def main():
    client = AsyncClient(
        client_id=os.environ['VELORA_CLIENT_ID'],
        client_secret=os.environ['VELORA_CLIENT_SECRET'],
        environment='production'
    )

    vehicles = await client.vehicles.list()

    # Get location for all vehicles
    locations = await asyncio.gather(*[
        client.vehicles.location(v.id) for v in vehicles
    ])

    await client.close()

asyncio.run(main())";

const JAVA_ERRORS: &str = r#"try {
    Vehicle vehicle = client.vehicles().get(vehicleId);
    System.out.println("Vehicle: " + vehicle.getMake() + " " + vehicle.getModel());
} catch (VehicleNotFoundException e) {
    System.err.println("Vehicle not found: " + e.getMessage());
} catch (RateLimitExceededException e) {
    System.err.println("Rate limit exceeded. Retry after: " + e.getRetryAfter());
} catch (VeloraException e) {
    System.err.println("API error: " + e.getMessage());
}"#;

const GO_BASIC: &str = r#"package main

import (
    "context"
    "fmt"
    "log"
    "os"

    velora "github.com/velora/connected-vehicles-go"
)

func main() {
    client := velora.NewClient(&velora.Config{
        ClientID:     os.Getenv("VELORA_CLIENT_ID"),
        ClientSecret: os.Getenv("VELORA_CLIENT_SECRET"),
        Environment:  "production",
    })

    ctx := context.Background()

    // Get vehicle location
    location, err := client.Vehicles.Location(ctx, vehicleID)
    if err != nil {
        log.Fatal(err)
    }

    fmt.Printf("Vehicle at: %f, %f\n", location.Latitude, location.Longitude)
}"#;

const PHP_BASIC: &str = r"<?php
require_once 'vendor/autoload.php';

use Velora\ConnectedVehicles\Client;

$client = new Client([
    'client_id' => $_ENV['VELORA_CLIENT_ID'],
    'client_secret' => $_ENV['VELORA_CLIENT_SECRET'],
    'environment' => 'production'
]);

$vehicles = $client->vehicles()->list();";
