//! Directus CMS client
//!
//! Every generated entity type becomes one collection keyed by `ascii_name`.
//! Collections are dropped and recreated on import.

use serde_json::{json, Value};
use tracing::{debug, info};

use erdb::generators::Output;
use erdb::schema::Properties;

/// Primary key of every imported collection
const PRIMARY_KEY: &str = "ascii_name";

const MULTIPART_BOUNDARY: &str = "----erdbimport";

#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    #[error("Authentication failure at {endpoint}: {reason}")]
    Authentication { endpoint: String, reason: String },

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(#[source] Box<ureq::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CmsResult<T> = Result<T, CmsError>;

/// Map a JSON schema primitive type onto a Directus field type
pub fn field_type(schema_type: &str) -> &str {
    match schema_type {
        "array" | "object" => "json",
        "number" => "decimal",
        other => other,
    }
}

fn primary_key_field() -> Value {
    json!({
        "field": PRIMARY_KEY,
        "type": "string",
        "schema": {
            "is_primary_key": true,
            "is_nullable": false,
        }
    })
}

/// Collection fields for a set of schema properties, primary key first
pub fn collection_fields(properties: &Properties) -> Vec<Value> {
    let mut fields = vec![primary_key_field()];
    for (name, property) in properties {
        if name.starts_with('$') {
            continue;
        }
        let schema_type = property.get("type").and_then(Value::as_str).unwrap_or("string");
        fields.push(json!({
            "field": name,
            "type": field_type(schema_type),
        }));
    }
    fields
}

/// Rows to import: each entity with its key as `ascii_name`
pub fn import_rows(data: &Output) -> Vec<Value> {
    data.iter()
        .map(|(name, record)| {
            let mut row = serde_json::Map::new();
            row.insert(PRIMARY_KEY.into(), json!(name));
            match record {
                Value::Object(fields) => row.extend(fields.clone()),
                other => {
                    row.insert("value".into(), other.clone());
                }
            }
            Value::Object(row)
        })
        .collect()
}

/// A multipart body holding a single file field
pub fn multipart_file(boundary: &str, file_name: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();

    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

    body
}

fn expect_success(result: Result<ureq::Response, ureq::Error>) -> CmsResult<ureq::Response> {
    match result {
        Ok(resp) if matches!(resp.status(), 200 | 204) => Ok(resp),
        Ok(resp) => {
            let status = resp.status();
            Err(CmsError::UnexpectedStatus {
                status,
                body: resp.into_string().unwrap_or_default(),
            })
        }
        Err(ureq::Error::Status(status, resp)) => Err(CmsError::UnexpectedStatus {
            status,
            body: resp.into_string().unwrap_or_default(),
        }),
        Err(e) => Err(CmsError::Transport(Box::new(e))),
    }
}

#[derive(Debug)]
pub struct DirectusClient {
    endpoint: String,
    access_token: String,
    active_folders: Vec<String>,
}

impl DirectusClient {
    /// Log in, run `f` with the session, and log out whatever `f` returns
    pub fn with_user<T, E: From<CmsError>>(
        endpoint: &str,
        email: &str,
        password: &str,
        f: impl FnOnce(&mut DirectusClient) -> Result<T, E>,
    ) -> Result<T, E> {
        let endpoint = endpoint.trim_end_matches('/').to_string();

        let response = ureq::post(&format!("{}/auth/login", endpoint))
            .send_json(json!({ "email": email, "password": password }));
        let auth: Value = match response {
            Ok(resp) if resp.status() == 200 => resp.into_json().map_err(CmsError::from)?,
            Ok(resp) => return Err(auth_failure(&endpoint, format!("status {}", resp.status())).into()),
            Err(ureq::Error::Status(code, _)) => {
                return Err(auth_failure(&endpoint, format!("status {}", code)).into())
            }
            Err(e) => return Err(auth_failure(&endpoint, e.to_string()).into()),
        };

        let token = |name: &str| {
            auth["data"][name]
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| auth_failure(&endpoint, format!("response has no {}", name)))
        };
        let access_token = token("access_token")?;
        let refresh_token = token("refresh_token")?;
        info!("Logged in to Directus instance at {}", endpoint);

        let mut client = DirectusClient {
            endpoint: endpoint.clone(),
            access_token,
            active_folders: Vec::new(),
        };
        let result = f(&mut client);

        // Logout failures do not mask the result of `f`
        let logout = ureq::post(&format!("{}/auth/logout", endpoint))
            .send_json(json!({ "refresh_token": refresh_token }));
        match logout {
            Ok(_) => info!("Logged out from Directus"),
            Err(e) => debug!("Logout failed: {}", e),
        }

        result
    }

    fn request(&self, method: &str, path: &str) -> ureq::Request {
        ureq::request(method, &format!("{}{}", self.endpoint, path))
            .set("Authorization", &format!("Bearer {}", self.access_token))
    }

    fn active_parent(&self) -> serde_json::Map<String, Value> {
        let mut meta = serde_json::Map::new();
        if let Some(folder) = self.active_folders.last() {
            meta.insert("group".into(), json!(folder));
        }
        meta
    }

    /// Recreate folder collection `name` and group collections created by
    /// `f` under it
    pub fn enter_folder<T, E: From<CmsError>>(
        &mut self,
        name: &str,
        collapsed: bool,
        f: impl FnOnce(&mut DirectusClient) -> Result<T, E>,
    ) -> Result<T, E> {
        let _ = self.request("DELETE", &format!("/collections/{}", name)).call();

        let mut meta = self.active_parent();
        meta.insert("collapse".into(), json!(collapsed));
        let _ = self.request("POST", "/collections").send_json(json!({
            "collection": name,
            "meta": meta,
            "schema": null,
        }));

        self.active_folders.push(name.to_string());
        let result = f(self);
        self.active_folders.pop();
        result
    }

    /// Drop `collection` and create it again from schema properties
    pub fn update_collection(&self, collection: &str, properties: &Properties) -> CmsResult<()> {
        info!("Creating collection \"{}\"", collection);

        let _ = self
            .request("DELETE", &format!("/collections/{}", collection))
            .call();

        expect_success(self.request("POST", "/collections").send_json(json!({
            "collection": collection,
            "meta": self.active_parent(),
            "schema": {},
            "fields": collection_fields(properties),
        })))?;

        expect_success(self.request("POST", "/permissions").send_json(json!({
            "collection": collection,
            "action": "read",
            "role": null,
            "fields": ["*"],
        })))?;

        Ok(())
    }

    /// Upload generated entities into `collection`
    pub fn import_data(&self, collection: &str, data: &Output) -> CmsResult<()> {
        if data.is_empty() {
            info!("Skipping import of zero-length data into \"{}\"", collection);
            return Ok(());
        }

        let rows = import_rows(data);
        info!("Importing {} items into \"{}\"", rows.len(), collection);

        let body = multipart_file(
            MULTIPART_BOUNDARY,
            &format!("{}.json", collection),
            "application/json",
            &serde_json::to_vec(&rows)?,
        );

        expect_success(
            self.request("POST", &format!("/utils/import/{}", collection))
                .set(
                    "Content-Type",
                    &format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY),
                )
                .send_bytes(&body),
        )?;

        Ok(())
    }
}

fn auth_failure(endpoint: &str, reason: String) -> CmsError {
    CmsError::Authentication {
        endpoint: endpoint.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_mapping() {
        assert_eq!(field_type("array"), "json");
        assert_eq!(field_type("object"), "json");
        assert_eq!(field_type("number"), "decimal");
        assert_eq!(field_type("integer"), "integer");
        assert_eq!(field_type("string"), "string");
    }

    #[test]
    fn test_collection_fields() {
        let properties = json!({
            "$schema": "http://json-schema.org/draft-07/schema",
            "name": {"type": "string"},
            "locations": {"type": "array"},
            "weight": {"type": "number"},
            "category": {"$ref": "enums/category.schema.json"}
        });
        let fields = collection_fields(properties.as_object().unwrap());

        assert_eq!(fields.len(), 5);
        assert_eq!(fields[0]["field"], json!("ascii_name"));
        assert_eq!(fields[0]["schema"]["is_primary_key"], json!(true));

        let type_of = |name: &str| {
            fields
                .iter()
                .find(|f| f["field"] == json!(name))
                .map(|f| f["type"].clone())
        };
        assert_eq!(type_of("locations"), Some(json!("json")));
        assert_eq!(type_of("weight"), Some(json!("decimal")));
        assert_eq!(type_of("category"), Some(json!("string")));
        assert_eq!(type_of("$schema"), None);
    }

    #[test]
    fn test_import_rows() {
        let mut data = Output::new();
        data.insert("Lantern".into(), json!({"id": 2070, "craftable": false}));
        data.insert("0".into(), json!([0.0, 0.5]));

        let rows = import_rows(&data);
        assert_eq!(rows[0], json!({"ascii_name": "Lantern", "id": 2070, "craftable": false}));
        assert_eq!(rows[1], json!({"ascii_name": "0", "value": [0.0, 0.5]}));
    }

    #[test]
    fn test_multipart_file() {
        let body = multipart_file("b", "tools.json", "application/json", b"[]");
        let text = String::from_utf8(body).unwrap();
        assert!(text.starts_with("--b\r\n"));
        assert!(text.contains("name=\"file\"; filename=\"tools.json\""));
        assert!(text.contains("\r\n\r\n[]\r\n"));
        assert!(text.ends_with("--b--\r\n"));
    }

    #[test]
    fn test_unreachable_endpoint_is_error() {
        let result: Result<(), CmsError> =
            DirectusClient::with_user("http://127.0.0.1:9", "a@b.c", "pw", |_| Ok(()));
        assert!(matches!(result, Err(CmsError::Authentication { .. })));
    }
}
