//! Product command handlers.

use tabled::Tabled;

use shopdesk_core::{
    ApiSource, Backoffice, ListSession, MediaFile, Product, ProductForm, ResourceSource,
};

use crate::cli::{GlobalOpts, ProductFields, ProductsArgs, ProductsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "SKU")]
    sku: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Discount")]
    discount: String,
    #[tabled(rename = "Brand")]
    brand: String,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            sku: p.sku.clone(),
            price: format!("{:.2}", p.price),
            quantity: p.quantity,
            discount: if p.has_discount {
                format!("{:.2}", p.discount_amount())
            } else {
                String::new()
            },
            brand: p.brand.as_ref().map(|b| b.name.clone()).unwrap_or_default(),
        }
    }
}

fn detail(p: &Product) -> String {
    let reference = |r: Option<&shopdesk_core::Reference>| {
        r.map(|r| format!("{} ({})", r.name, r.id)).unwrap_or_default()
    };
    let images = p
        .images
        .iter()
        .map(|i| i.file_name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    output::detail_lines(&[
        ("ID", p.id.to_string()),
        ("Name", p.name.clone()),
        ("SKU", p.sku.clone()),
        ("Price", format!("{:.2}", p.price)),
        ("Quantity", p.quantity.to_string()),
        (
            "Discount",
            if p.has_discount {
                format!("{:.2}", p.discount_amount())
            } else {
                "none".into()
            },
        ),
        ("Brand", reference(p.brand.as_ref())),
        ("Category", reference(p.category.as_ref())),
        ("Summary", p.small_desc.clone().unwrap_or_default()),
        ("Images", images),
        ("Created", p.created_at.clone().unwrap_or_default()),
    ])
}

fn print_product(product: &Product, global: &GlobalOpts) {
    let out = output::render_single(global.output, product, detail, |p| p.id.to_string());
    output::print_output(&out, global.quiet);
}

// ── Form building ───────────────────────────────────────────────────

fn load_images(fields: &ProductFields) -> Result<Vec<MediaFile>, CliError> {
    fields
        .images
        .iter()
        .map(|path| MediaFile::from_path(path).map_err(CliError::from))
        .collect()
}

fn create_form(fields: ProductFields) -> Result<ProductForm, CliError> {
    let images = load_images(&fields)?;
    let form = ProductForm {
        name: util::required(fields.name, "name")?,
        small_desc: fields.small_desc.unwrap_or_default(),
        desc: fields.desc.unwrap_or_default(),
        sku: util::required(fields.sku, "sku")?,
        price: util::required(fields.price, "price")?,
        quantity: fields.quantity.unwrap_or(0),
        has_discount: false,
        discount: None,
        start_discount: fields.start_discount,
        end_discount: fields.end_discount,
        brand_id: util::required(fields.brand_id, "brand-id")?,
        category_id: util::required(fields.category_id, "category-id")?,
        images,
    };
    Ok(form.with_discount(fields.discount))
}

/// Overlay the given fields onto an edit draft.
fn apply_fields(mut draft: ProductForm, fields: ProductFields) -> Result<ProductForm, CliError> {
    draft.images = load_images(&fields)?;
    if let Some(v) = fields.name {
        draft.name = v;
    }
    if let Some(v) = fields.sku {
        draft.sku = v;
    }
    if let Some(v) = fields.price {
        draft.price = v;
    }
    if let Some(v) = fields.quantity {
        draft.quantity = v;
    }
    if let Some(v) = fields.small_desc {
        draft.small_desc = v;
    }
    if let Some(v) = fields.desc {
        draft.desc = v;
    }
    if let Some(v) = fields.start_discount {
        draft.start_discount = Some(v);
    }
    if let Some(v) = fields.end_discount {
        draft.end_discount = Some(v);
    }
    if let Some(v) = fields.brand_id {
        draft.brand_id = v;
    }
    if let Some(v) = fields.category_id {
        draft.category_id = v;
    }
    if let Some(v) = fields.discount {
        let discount = if v.trim().is_empty() { None } else { Some(v) };
        draft = draft.with_discount(discount);
    }
    Ok(draft)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    backoffice: &Backoffice,
    args: ProductsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ProductsCommand::List(list) => {
            let page_size = util::page_size(&list, backoffice.config().page_size)?;
            let session: ListSession<ApiSource<Product>> = backoffice.session(page_size);
            util::load_page(&session, list.page).await?;
            util::print_window(&session, global, |p| ProductRow::from(p), |p| p.id.to_string());
            Ok(())
        }

        ProductsCommand::Get { id } => {
            let product = backoffice
                .products()
                .source()
                .get(id)
                .await
                .map_err(|e| CliError::from(e).for_resource("product", id))?;
            print_product(&product, global);
            Ok(())
        }

        ProductsCommand::Create(fields) => {
            let form = create_form(fields)?;
            let product = backoffice.products().source().create(&form).await?;
            output::status(global, &format!("Created product {}", product.id));
            print_product(&product, global);
            Ok(())
        }

        ProductsCommand::Update { id, page, fields } => {
            let session = backoffice.products();
            let target = util::find_on_page(&session, page, id).await?;
            let draft = session.mutations().request_update(target).await?;
            let draft = match apply_fields(draft, fields) {
                Ok(draft) => draft,
                Err(e) => {
                    session.mutations().cancel().await?;
                    return Err(e);
                }
            };

            let updated = session
                .mutations()
                .confirm_update(draft)
                .await
                .map_err(|e| CliError::from(e).for_resource("product", id))?;
            output::status(global, &format!("Updated product {id}"));
            print_product(&updated, global);
            Ok(())
        }

        ProductsCommand::Delete(args) => {
            let session = backoffice.products();
            util::delete_on_page(&session, &args, global)
                .await
                .map(|_| ())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, Command};

    fn fields(args: &[&str]) -> ProductFields {
        let mut argv = vec!["shopdesk", "products", "create"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Products(ProductsArgs {
                command: ProductsCommand::Create(fields),
            }) => fields,
            other => panic!("unexpected {other:?}"),
        }
    }

    fn draft() -> ProductForm {
        ProductForm {
            name: "Lamp".into(),
            small_desc: String::new(),
            desc: String::new(),
            sku: "L-1".into(),
            price: 10.0,
            quantity: 3,
            has_discount: true,
            discount: Some("2".into()),
            start_discount: None,
            end_discount: None,
            brand_id: 1,
            category_id: 2,
            images: Vec::new(),
        }
    }

    #[test]
    fn create_requires_core_fields() {
        let err = create_form(fields(&["--name", "Lamp"])).unwrap_err();
        assert!(matches!(err, CliError::Validation { ref field, .. } if field == "sku"));
    }

    #[test]
    fn create_derives_discount_flag() {
        let form = create_form(fields(&[
            "--name",
            "Lamp",
            "--sku",
            "L-1",
            "--price",
            "10",
            "--brand-id",
            "1",
            "--category-id",
            "2",
            "--discount",
            "1.5",
        ]))
        .unwrap();
        assert!(form.has_discount);
        assert_eq!(form.quantity, 0);
    }

    #[test]
    fn empty_discount_clears_it_on_update() {
        let patched = apply_fields(draft(), fields(&["--discount", ""])).unwrap();
        assert!(!patched.has_discount);
        assert!(patched.discount.is_none());
        assert_eq!(patched.name, "Lamp");
    }

    #[test]
    fn untouched_fields_keep_draft_values() {
        let patched = apply_fields(draft(), fields(&["--quantity", "9"])).unwrap();
        assert_eq!(patched.quantity, 9);
        assert!(patched.has_discount);
        assert_eq!(patched.sku, "L-1");
    }
}
