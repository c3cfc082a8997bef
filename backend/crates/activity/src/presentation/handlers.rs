//! HTTP Handlers
//!
//! All handlers run behind the session gate, so a [`CurrentUser`] is
//! always available.

use auth::CurrentUser;
use axum::Form;
use axum::Json;
use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::Redirect;
use kernel::id::ActivityId;

use crate::domain::{ActivityInput, ActivityKind, ActivityStats, fixtures};
use crate::error::{ActivityError, ActivityResult};
use crate::presentation::dto::{ActivityForm, ActivityListResponse, ActivityView};

/// GET /api/{kind}
pub async fn list(
    State(kind): State<ActivityKind>,
    user: CurrentUser,
) -> Json<ActivityListResponse> {
    let records = fixtures::listed();
    let stats = ActivityStats::from_records(&records);

    Json(ActivityListResponse {
        kind: kind.slug(),
        user: (&user).into(),
        stats: stats.into(),
        items: records.into_iter().map(ActivityView::from).collect(),
    })
}

/// GET /api/{kind}/{id}
pub async fn show(
    State(kind): State<ActivityKind>,
    id: Result<Path<i64>, PathRejection>,
) -> ActivityResult<Json<ActivityView>> {
    let Path(id) = id?;
    tracing::debug!(kind = %kind, activity_id = id, "Load activity for editing");

    let record = fixtures::editable(ActivityId::from_i64(id)).ok_or(ActivityError::NotFound(id))?;
    Ok(Json(record.into()))
}

/// POST /api/{kind}
pub async fn create(
    State(kind): State<ActivityKind>,
    user: CurrentUser,
    form: Result<Form<ActivityForm>, FormRejection>,
) -> ActivityResult<Redirect> {
    let Form(form) = form?;
    let input = ActivityInput::new(&form.start_time, &form.task, &form.duration)?;

    // TODO: persist once activities have a store
    tracing::info!(
        kind = %kind,
        user_id = %user.id,
        start_time = %input.start_time,
        task = %input.task,
        duration_hours = input.duration_hours,
        "Create {}",
        kind.singular()
    );

    Ok(Redirect::to(&kind.list_path()))
}

/// POST /api/{kind}/{id}
pub async fn update(
    State(kind): State<ActivityKind>,
    user: CurrentUser,
    id: Result<Path<i64>, PathRejection>,
    form: Result<Form<ActivityForm>, FormRejection>,
) -> ActivityResult<Redirect> {
    let Path(id) = id?;
    if !fixtures::exists(ActivityId::from_i64(id)) {
        return Err(ActivityError::NotFound(id));
    }
    let Form(form) = form?;
    let input = ActivityInput::new(&form.start_time, &form.task, &form.duration)?;

    tracing::info!(
        kind = %kind,
        user_id = %user.id,
        activity_id = id,
        start_time = %input.start_time,
        task = %input.task,
        duration_hours = input.duration_hours,
        "Edit {}",
        kind.singular()
    );

    Ok(Redirect::to(&kind.list_path()))
}

/// POST /api/{kind}/{id}/delete
pub async fn delete(
    State(kind): State<ActivityKind>,
    user: CurrentUser,
    id: Result<Path<i64>, PathRejection>,
) -> ActivityResult<Redirect> {
    let Path(id) = id?;
    if !fixtures::exists(ActivityId::from_i64(id)) {
        return Err(ActivityError::NotFound(id));
    }

    tracing::info!(
        kind = %kind,
        user_id = %user.id,
        activity_id = id,
        "Delete {}",
        kind.singular()
    );

    Ok(Redirect::to(&kind.list_path()))
}
