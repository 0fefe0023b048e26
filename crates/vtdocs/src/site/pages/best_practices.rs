use crate::site::content::build::{bullets, callout, code, para, section};
use crate::site::content::{Block, Tone};
use crate::site::{Page, Route};

fn practice(title: &str, description: &str, example: &str, tips: &[&str]) -> Vec<Block> {
    vec![
        para(&format!("{title}: {description}.")),
        code("javascript", Some(title), example),
        bullets(tips),
    ]
}

pub fn page() -> Page {
    Page {
        route: Route::BestPractices,
        title: "Best Practices".into(),
        lead: "Guidelines for building secure, efficient, and reliable integrations with the \
               Velora Connected Vehicles API."
            .into(),
        sections: vec![
            section(
                "Authentication & Security",
                [
                    practice(
                        "Secure Credential Storage",
                        "Store API credentials securely using environment variables or secure vaults",
                        CREDENTIALS,
                        &[
                            "Never commit credentials to version control",
                            "Use different credentials for different environments",
                            "Rotate credentials regularly",
                        ],
                    ),
                    practice(
                        "Token Management",
                        "Implement proper token caching and refresh mechanisms",
                        TOKEN_MANAGER,
                        &[
                            "Cache tokens until expiration",
                            "Implement automatic refresh",
                            "Handle token refresh failures gracefully",
                        ],
                    ),
                ]
                .concat(),
            ),
            section(
                "Rate Limiting & Performance",
                [
                    practice(
                        "Respect Rate Limits",
                        "Implement proper rate limiting to avoid hitting API limits",
                        BACKOFF,
                        &[
                            "Monitor rate limit headers",
                            "Implement exponential backoff",
                            "Queue requests when approaching limits",
                        ],
                    ),
                    practice(
                        "Efficient Data Fetching",
                        "Optimize API calls to minimize requests and improve performance",
                        PAGINATION,
                        &[
                            "Fetch independent resources concurrently",
                            "Page through large collections",
                            "Prefer webhooks over polling",
                        ],
                    ),
                ]
                .concat(),
            ),
            section(
                "Reliability",
                [
                    practice(
                        "Smart Caching Strategy",
                        "Implement intelligent caching to reduce API calls",
                        CACHE,
                        &[
                            "Use short TTLs for location data",
                            "Use longer TTLs for static vehicle information",
                            "Invalidate caches on webhook events",
                        ],
                    ),
                    vec![callout(
                        Tone::Info,
                        "Graceful Degradation",
                        "When the API is unavailable, fall back to cached data and tell users \
                         the information may be stale.",
                    )],
                ]
                .concat(),
            ),
            section(
                "Common Pitfalls",
                vec![
                    callout(
                        Tone::Warning,
                        "Hardcoding Credentials",
                        "Never hardcode API credentials in your source code.",
                    ),
                    callout(
                        Tone::Warning,
                        "Ignoring Rate Limits",
                        "Not implementing rate limiting can result in rejected API calls.",
                    ),
                    callout(
                        Tone::Warning,
                        "Polling Instead of Webhooks",
                        "Continuously polling for updates is inefficient and quickly exhausts \
                         rate limits.",
                    ),
                    callout(
                        Tone::Warning,
                        "Synchronous Processing",
                        "Processing webhook events synchronously can cause timeouts and missed \
                         events.",
                    ),
                ],
            ),
        ],
    }
}

const CREDENTIALS: &str = r"// Good - Use environment variables
const client = new VeloraClient({
  clientId: process.env.VELORA_CLIENT_ID,
  clientSecret: process.env.VELORA_CLIENT_SECRET
});

// Bad - Hardcoded credentials
const client = new VeloraClient({
  clientId: 'your-client-id',
  clientSecret: 'your-client-secret'
});";

const TOKEN_MANAGER: &str = r"class TokenManager {
  constructor() {
    this.token = null;
    this.expiresAt = null;
  }

  async getValidToken() {
    if (this.token && this.expiresAt > Date.now()) {
      return this.token;
    }

    await this.refreshToken();
    return this.token;
  }

  async refreshToken() {
    const response = await this.client.auth.getToken();
    this.token = response.access_token;
    this.expiresAt = Date.now() + (response.expires_in * 1000);
  }
}";

const BACKOFF: &str = r"async function withRetry(requestFn, maxRetries = 3) {
  for (let attempt = 0; attempt <= maxRetries; attempt++) {
    try {
      return await requestFn();
    } catch (error) {
      if (error.status !== 429 || attempt === maxRetries) {
        throw error;
      }
      const retryAfter = error.headers['retry-after'] || Math.pow(2, attempt);
      await sleep(retryAfter * 1000);
    }
  }
}";

const PAGINATION: &str = r"// Fetch several vehicles concurrently
const vehicles = await Promise.all(
  vehicleIds.map(id => client.vehicles.get(id))
);

// Page through all vehicles
async function getAllVehicles() {
  const allVehicles = [];
  let page = 1;
  let hasMore = true;

  while (hasMore) {
    const response = await client.vehicles.list({ page, per_page: 50 });
    allVehicles.push(...response.vehicles);
    hasMore = response.vehicles.length === 50;
    page++;
  }

  return allVehicles;
}";

const CACHE: &str = r"class VehicleCache {
  constructor() {
    this.cache = new Map();
    this.ttl = { location: 30000, vehicle: 3600000 };
  }

  async get(key, dataType, fetchFunction) {
    const cached = this.cache.get(key);
    const ttl = this.ttl[dataType] || 300000;

    if (cached && Date.now() - cached.timestamp < ttl) {
      return cached.data;
    }

    const data = await fetchFunction();
    this.cache.set(key, { data, timestamp: Date.now() });
    return data;
  }
}";
