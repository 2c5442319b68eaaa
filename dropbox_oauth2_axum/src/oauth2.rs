use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    response::Redirect,
    routing::{get, post},
};

use dropbox_oauth2::{
    AuthResponse, AuthorizedResponse, OAuth2Client, RefreshTokenRequest, TokenResponse,
    authorized_core, prepare_authorization_core, refresh_token_core,
};

use super::error::{ErrorResponse, IntoResponseError, json_rejection_response};

pub(super) fn router() -> Router<OAuth2Client> {
    Router::new()
        .route("/authorize/dropbox", get(authorize_dropbox))
        .route("/dropbox/redirect", get(dropbox_redirect))
        .route("/dropbox/refresh-token", post(refresh_token))
}

/// Redirect the browser to the Dropbox consent page
async fn authorize_dropbox(State(client): State<OAuth2Client>) -> Result<Redirect, ErrorResponse> {
    let (auth_url, _state) = prepare_authorization_core(&client).into_response_error()?;
    Ok(Redirect::to(&auth_url))
}

/// Redirect callback: exchange the code, then fetch team info with the new token
async fn dropbox_redirect(
    State(client): State<OAuth2Client>,
    Query(query): Query<AuthResponse>,
) -> Result<Json<AuthorizedResponse>, ErrorResponse> {
    tracing::info!("Handling OAuth redirect");
    let authorized = authorized_core(&client, &query)
        .await
        .into_response_error()?;
    Ok(Json(authorized))
}

async fn refresh_token(
    State(client): State<OAuth2Client>,
    request: Result<Json<RefreshTokenRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ErrorResponse> {
    let Json(request) = request.map_err(json_rejection_response)?;
    let token = refresh_token_core(&client, &request)
        .await
        .into_response_error()?;
    Ok(Json(token))
}
