use axum::{
    extract::{Multipart, State},
    response::Redirect,
};
use pdf_compose::{ComposeError, LayoutOptions, compose_pdf, decode_images};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

/// Form fields of the upload form
#[derive(Debug, Default)]
struct ConvertForm {
    layout: Option<String>,
    border_size: Option<String>,
    border_color: Option<String>,
    /// Encoded image files in upload order
    images: Vec<Vec<u8>>,
}

/// POST /convert
///
/// Composes the uploaded images and redirects to the result page naming the
/// stored PDF.
pub async fn handle_convert(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Redirect, AppError> {
    let form = read_form(multipart).await?;

    if form.images.is_empty() {
        return Err(AppError::BadRequest("No images uploaded".to_string()));
    }

    let options = LayoutOptions::from_form_fields(
        form.layout.as_deref(),
        form.border_size.as_deref(),
        form.border_color.as_deref(),
    )?;

    let image_count = form.images.len();
    let images = form.images;
    let bytes = tokio::task::spawn_blocking(move || {
        let images = decode_images(&images)?;
        compose_pdf(&images, &options)
    })
    .await
    .map_err(ComposeError::from)??;

    let name = state.store.save(bytes).await?;
    info!("Composed {image_count} image(s) into {name}");

    Ok(Redirect::to(&format!("/result.html?file={name}")))
}

async fn read_form(mut multipart: Multipart) -> Result<ConvertForm, AppError> {
    let mut form = ConvertForm::default();

    while let Some(field) = multipart.next_field().await? {
        // File inputs left empty still arrive, with a blank file name
        let is_file = field.file_name().map(|name| !name.is_empty());
        if let Some(has_name) = is_file {
            if !has_name {
                continue;
            }
            let bytes = field.bytes().await?;
            if !bytes.is_empty() {
                form.images.push(bytes.to_vec());
            }
            continue;
        }

        let name = field.name().unwrap_or_default().to_string();
        let value = field.text().await?;
        match name.as_str() {
            "layout" => form.layout = Some(value),
            "borderSize" => form.border_size = Some(value),
            "borderColor" => form.border_color = Some(value),
            _ => {}
        }
    }

    Ok(form)
}
