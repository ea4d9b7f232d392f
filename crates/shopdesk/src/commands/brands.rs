//! Brand command handlers.

use tabled::Tabled;

use shopdesk_core::{
    ApiSource, Backoffice, Brand, BrandForm, ListSession, MediaFile, ResourceSource,
};

use crate::cli::{BrandsArgs, BrandsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BrandRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl BrandRow {
    fn new(b: &Brand, color: bool) -> Self {
        Self {
            id: b.brand_id,
            name: b.brand_name.clone(),
            slug: b.brand_slug.clone().unwrap_or_default(),
            status: output::status_cell(b.brand_status.is_active(), color),
        }
    }
}

fn detail(b: &Brand) -> String {
    output::detail_lines(&[
        ("ID", b.brand_id.to_string()),
        ("Name", b.brand_name.clone()),
        ("Slug", b.brand_slug.clone().unwrap_or_default()),
        ("Status", b.brand_status.to_string()),
        ("Logo", b.logo.clone().unwrap_or_default()),
    ])
}

fn print_brand(brand: &Brand, global: &GlobalOpts) {
    let out = output::render_single(global.output, brand, detail, |b| b.brand_id.to_string());
    output::print_output(&out, global.quiet);
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    backoffice: &Backoffice,
    args: BrandsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let color = output::should_color(global.color);

    match args.command {
        BrandsCommand::List(list) => {
            let page_size = util::page_size(&list, backoffice.config().page_size)?;
            let session: ListSession<ApiSource<Brand>> = backoffice.session(page_size);
            util::load_page(&session, list.page).await?;
            util::print_window(
                &session,
                global,
                |b| BrandRow::new(b, color),
                |b| b.brand_id.to_string(),
            );
            Ok(())
        }

        BrandsCommand::Get { id } => {
            let brand = backoffice
                .brands()
                .source()
                .get(id)
                .await
                .map_err(|e| CliError::from(e).for_resource("brand", id))?;
            print_brand(&brand, global);
            Ok(())
        }

        BrandsCommand::Create { name, status, logo } => {
            let logo = logo.as_deref().map(MediaFile::from_path).transpose()?;
            let brand = backoffice
                .brands()
                .source()
                .create(&BrandForm { name, status, logo })
                .await?;
            output::status(global, &format!("Created brand {}", brand.brand_id));
            print_brand(&brand, global);
            Ok(())
        }

        BrandsCommand::Update {
            id,
            page,
            name,
            status,
            logo,
        } => {
            let session = backoffice.brands();
            let target = util::find_on_page(&session, page, id).await?;
            let mut draft = session.mutations().request_update(target).await?;

            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(status) = status {
                draft.status = status;
            }
            if let Some(path) = logo {
                draft.logo = Some(MediaFile::from_path(&path)?);
            }

            let updated = session
                .mutations()
                .confirm_update(draft)
                .await
                .map_err(|e| CliError::from(e).for_resource("brand", id))?;
            output::status(global, &format!("Updated brand {id}"));
            print_brand(&updated, global);
            Ok(())
        }

        BrandsCommand::Delete(args) => {
            let session = backoffice.brands();
            util::delete_on_page(&session, &args, global)
                .await
                .map(|_| ())
        }
    }
}
