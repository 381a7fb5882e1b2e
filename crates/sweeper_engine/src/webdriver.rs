use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

use crate::{DriverError, ElementHandle, Locator, Page};

/// W3C key under which element references travel on the wire.
const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

#[derive(Debug, Clone)]
pub struct WebDriverSettings {
    /// Base URL of the WebDriver server, e.g. `http://localhost:4444`.
    pub endpoint: String,
    /// Id of the already-open session to drive.
    pub session_id: String,
    pub request_timeout: Duration,
}

impl WebDriverSettings {
    pub fn new(endpoint: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            session_id: session_id.into(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// [`Page`] backed by an existing session on a W3C WebDriver server.
#[derive(Debug, Clone)]
pub struct WebDriverPage {
    client: reqwest::Client,
    session_url: Url,
}

#[derive(Deserialize)]
struct Envelope<T> {
    value: T,
}

#[derive(Deserialize)]
struct ErrorValue {
    error: String,
    #[serde(default)]
    message: String,
}

impl WebDriverPage {
    pub fn new(settings: WebDriverSettings) -> Result<Self, DriverError> {
        if settings.session_id.trim().is_empty() {
            return Err(DriverError::InvalidConfig("session id is empty".into()));
        }
        let mut endpoint = Url::parse(&settings.endpoint)
            .map_err(|err| DriverError::InvalidConfig(format!("{}: {err}", settings.endpoint)))?;
        if !endpoint.path().ends_with('/') {
            let path = format!("{}/", endpoint.path());
            endpoint.set_path(&path);
        }
        let session_url = endpoint
            .join(&format!("session/{}/", settings.session_id))
            .map_err(|err| DriverError::InvalidConfig(err.to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| DriverError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            session_url,
        })
    }

    /// URL of the page the session is showing. Doubles as a session probe.
    pub async fn current_url(&self) -> Result<String, DriverError> {
        self.command(Method::GET, "url", None).await
    }

    async fn command<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, DriverError> {
        let url = self
            .session_url
            .join(path)
            .map_err(|err| DriverError::InvalidConfig(err.to_string()))?;

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request
            .send()
            .await
            .map_err(|err| DriverError::Transport(err.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| DriverError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(match serde_json::from_slice::<Envelope<ErrorValue>>(&bytes) {
                Ok(Envelope { value }) => map_error(value),
                Err(_) => DriverError::Transport(format!("http status {status}")),
            });
        }

        serde_json::from_slice::<Envelope<T>>(&bytes)
            .map(|envelope| envelope.value)
            .map_err(|err| DriverError::Protocol {
                error: "invalid response".into(),
                message: err.to_string(),
            })
    }
}

#[async_trait]
impl Page for WebDriverPage {
    async fn find_elements(&self, locator: Locator<'_>) -> Result<Vec<ElementHandle>, DriverError> {
        let found: Vec<Value> = self
            .command(Method::POST, "elements", Some(locator_body(locator)))
            .await?;
        found.iter().map(element_from_value).collect()
    }

    async fn find_element(&self, locator: Locator<'_>) -> Result<ElementHandle, DriverError> {
        let found: Value = self
            .command(Method::POST, "element", Some(locator_body(locator)))
            .await?;
        element_from_value(&found)
    }

    async fn find_child(
        &self,
        parent: &ElementHandle,
        locator: Locator<'_>,
    ) -> Result<ElementHandle, DriverError> {
        let path = format!("element/{parent}/element");
        let found: Value = self
            .command(Method::POST, &path, Some(locator_body(locator)))
            .await?;
        element_from_value(&found)
    }

    async fn attribute(
        &self,
        element: &ElementHandle,
        name: &str,
    ) -> Result<Option<String>, DriverError> {
        let path = format!("element/{element}/attribute/{name}");
        self.command(Method::GET, &path, None).await
    }

    async fn text(&self, element: &ElementHandle) -> Result<String, DriverError> {
        let path = format!("element/{element}/text");
        self.command(Method::GET, &path, None).await
    }

    async fn click(&self, element: &ElementHandle) -> Result<(), DriverError> {
        let path = format!("element/{element}/click");
        let _: Value = self.command(Method::POST, &path, Some(json!({}))).await?;
        Ok(())
    }

    async fn execute_script(&self, script: &str, args: Vec<Value>) -> Result<Value, DriverError> {
        let body = json!({ "script": script, "args": args });
        self.command(Method::POST, "execute/sync", Some(body)).await
    }
}

fn locator_body(locator: Locator<'_>) -> Value {
    let (using, value) = match locator {
        Locator::Id(id) => ("css selector", format!("[id=\"{}\"]", css_escape(id))),
        Locator::ClassName(class) => ("css selector", format!("[class~=\"{}\"]", css_escape(class))),
        Locator::TagName(tag) => ("tag name", tag.to_owned()),
    };
    json!({ "using": using, "value": value })
}

fn css_escape(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "\\\"")
}

fn element_from_value(value: &Value) -> Result<ElementHandle, DriverError> {
    value
        .get(ELEMENT_KEY)
        .and_then(Value::as_str)
        .map(ElementHandle::new)
        .ok_or_else(|| DriverError::Protocol {
            error: "invalid response".into(),
            message: format!("not an element reference: {value}"),
        })
}

fn map_error(value: ErrorValue) -> DriverError {
    match value.error.as_str() {
        "no such element" | "stale element reference" => DriverError::NoSuchElement(value.message),
        "javascript error" => DriverError::Script {
            message: value.message,
        },
        _ => DriverError::Protocol {
            error: value.error,
            message: value.message,
        },
    }
}
