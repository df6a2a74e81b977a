//! REST API client for the VelocitMax backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Network` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses are decoded
//! into the backend's `{message}` body where possible so forms can surface
//! the server's own wording; a 401 from identity resolution becomes
//! `SessionExpired`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{AuthResponse, NewTask, Task, TaskStatus, User};

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn task_endpoint(task_id: &str) -> String {
    format!("/api/tasks/{task_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn task_status_endpoint(task_id: &str) -> String {
    format!("/api/tasks/{task_id}/status")
}

#[cfg(any(test, feature = "hydrate"))]
fn task_image_endpoint(task_id: &str, image_id: &str) -> String {
    format!("/api/tasks/{task_id}/images/{image_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn task_file_endpoint(task_id: &str, file_id: &str) -> String {
    format!("/api/tasks/{task_id}/files/{file_id}")
}

/// Decode a rejected response into an `ApiError`, consuming the body.
#[cfg(feature = "hydrate")]
async fn rejection(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.json::<super::error::ErrorBody>().await.ok();
    super::error::classify(status, body)
}

#[cfg(feature = "hydrate")]
fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Resolve the current user from `GET /auth/me`.
///
/// # Errors
///
/// `SessionExpired` on a 401, `Auth` for other rejections, `Network` when
/// the request cannot complete.
pub async fn fetch_current_user(token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network)?;
        if resp.status() == 401 {
            return Err(ApiError::SessionExpired);
        }
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        resp.json::<User>().await.map_err(network)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Sign in with credentials via `POST /auth/login`.
///
/// # Errors
///
/// `Auth` carrying the backend's message on rejected credentials, `Network`
/// when the request cannot complete.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        resp.json::<AuthResponse>().await.map_err(network)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create an account via `POST /auth/register`.
///
/// # Errors
///
/// Same contract as [`login`].
pub async fn register(name: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "name": name, "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        resp.json::<AuthResponse>().await.map_err(network)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch every task visible to the caller from `GET /tasks/get`.
///
/// # Errors
///
/// `Auth`/`Network` per the module contract.
pub async fn fetch_tasks(token: &str) -> Result<Vec<Task>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/tasks/get")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        let body: super::types::TasksEnvelope = resp.json().await.map_err(network)?;
        Ok(body.tasks)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the team directory from `GET /users`.
///
/// # Errors
///
/// `Auth`/`Network` per the module contract.
pub async fn fetch_users(token: &str) -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/users")
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        let body: super::types::UsersEnvelope = resp.json().await.map_err(network)?;
        Ok(body.users)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a task via `POST /tasks/create` (multipart form fields).
///
/// # Errors
///
/// `Auth` with the backend's message when the create is rejected, including
/// a 2xx body that reports `success: false`.
pub async fn create_task(token: &str, task: &NewTask) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("could not build form data".to_owned()))?;
        let _ = form.append_with_str("title", &task.title);
        let _ = form.append_with_str("description", &task.description);
        let _ = form.append_with_str("dueDate", &task.due_date);
        let _ = form.append_with_str("assignedTo", &task.assigned_to);
        let _ = form.append_with_str("priority", task.priority.as_str());
        let _ = form.append_with_str("createdBy", &task.created_by);

        let resp = gloo_net::http::Request::post("/api/tasks/create")
            .header("Authorization", &bearer(token))
            .body(form)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let status = resp.status();
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        let body: super::types::CreateTaskResponse = resp.json().await.map_err(network)?;
        if body.success {
            Ok(())
        } else {
            Err(ApiError::Auth {
                status,
                message: body
                    .message
                    .unwrap_or_else(|| "Failed to create task".to_owned()),
            })
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, task);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Move a task to a new status via `PUT /tasks/:id/status`.
///
/// # Errors
///
/// `Auth`/`Network` per the module contract.
pub async fn update_task_status(
    token: &str,
    task_id: &str,
    status: TaskStatus,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "status": status });
        let resp = gloo_net::http::Request::put(&task_status_endpoint(task_id))
            .header("Authorization", &bearer(token))
            .json(&payload)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, task_id, status);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Delete a task via `DELETE /tasks/:id`.
///
/// # Errors
///
/// `Auth`/`Network` per the module contract.
pub async fn delete_task(token: &str, task_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&task_endpoint(task_id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, task_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Remove an attached image via `DELETE /tasks/:id/images/:imageId`.
///
/// # Errors
///
/// `Auth`/`Network` per the module contract.
pub async fn delete_task_image(token: &str, task_id: &str, image_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&task_image_endpoint(task_id, image_id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, task_id, image_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Remove an attached file via `DELETE /tasks/:id/files/:fileId`.
///
/// # Errors
///
/// `Auth`/`Network` per the module contract.
pub async fn delete_task_file(token: &str, task_id: &str, file_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&task_file_endpoint(task_id, file_id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(network)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, task_id, file_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
