//! Generated TypeScript documents.
//!
//! Templates cannot contain literal braces, so every `{`/`}` the output
//! needs is either a whole literal line or a bound value. Only the lines
//! carrying identifiers go through the template engine.
//!
//! Shared types (`types.ts`):
//!
//! ```text
//! import { Container } from '@digen/container';
//! export interface ServicesList {}
//! export type ServicesContainer = Container<ServicesList>;
//! ```

use crate::domain::{
    entities::{
        config::{RegisterOptions, TypesOptions},
        service::ServiceDef,
    },
    error::DomainResult,
    naming::{NamingCase, concat_names, parameterize_name},
    template::{Bindings, Template},
};

/// File name of the shared types document inside a service directory.
pub const TYPES_FILE_NAME: &str = "types.ts";

/// Extensible interface every registration file merges into.
pub const SERVICES_LIST: &str = "ServicesList";

const REGISTER_FILE_PATTERN: &str = "register{Name}.ts";
const REGISTER_FN_PATTERN: &str = "register{Name}";

/// Registration file name for `service`, e.g. `registerUserService.ts`.
pub fn register_file_name(service: &ServiceDef) -> DomainResult<String> {
    parameterize_name(REGISTER_FILE_PATTERN, service.name(), NamingCase::Pascal)
}

/// Line-oriented document builder.
#[derive(Debug, Default)]
struct Document {
    lines: Vec<String>,
}

impl Document {
    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn render(&mut self, template: &str, bindings: &Bindings) -> DomainResult<()> {
        let rendered = Template::parse(template)?.render(bindings)?;
        self.lines.push(rendered);
        Ok(())
    }

    /// `header {` … `}` with each body line indented by `depth` levels.
    fn block(&mut self, header: String, body: &[String], depth: usize) {
        let indent = "  ".repeat(depth);
        self.line(format!("{indent}{}", concat_names(&[header.as_str(), "{"], " ")));
        for line in body {
            self.line(format!("{indent}  {line}"));
        }
        self.line(format!("{indent}}}"));
    }

    fn finish(self) -> String {
        let mut out = concat_names(&self.lines, "\n");
        out.push('\n');
        out
    }
}

/// `{ A }` import clause.
fn import_clause(symbol: &str) -> String {
    concat_names(&["{", symbol, "}"], " ")
}

/// Render the shared types document.
///
/// `services` is accepted for symmetry with the registration document but
/// not used: services join `ServicesList` through declaration merging in
/// their own registration files.
pub fn render_types_document(
    _services: &[ServiceDef],
    options: &TypesOptions,
) -> DomainResult<String> {
    let bindings = Bindings::new()
        .with("imports", import_clause(&options.container_type))
        .with("library", options.library_path.as_str())
        .with("list", SERVICES_LIST)
        .with("container", options.container_type.as_str())
        .with("context", options.context_type.as_str())
        .with("empty", "{}");

    let mut doc = Document::default();
    doc.render("import {imports} from '{library}';", &bindings)?;
    doc.render("export interface {list} {empty}", &bindings)?;
    doc.render("export type {context} = {container}<{list}>;", &bindings)?;
    Ok(doc.finish())
}

/// Render the registration document for one service.
pub fn render_register_document(
    service: &ServiceDef,
    options: &RegisterOptions,
) -> DomainResult<String> {
    let key = NamingCase::Camel.apply(service.name());
    let register_fn = parameterize_name(REGISTER_FN_PATTERN, service.name(), NamingCase::Pascal)?;
    let interface = service.interface();

    let bindings = Bindings::new()
        .with("container_imports", import_clause(&options.container_type))
        .with("context_imports", import_clause(&options.context_type))
        .with("library", options.library_path.as_str())
        .with("types_module", options.types_module.as_str())
        .with("context", options.context_type.as_str())
        .with("interface", interface)
        .with("list", SERVICES_LIST)
        .with("key", key.as_str())
        .with("register", register_fn.as_str());

    let render = |template: &str| -> DomainResult<String> {
        Template::parse(template)?.render(&bindings)
    };

    let mut doc = Document::default();
    doc.render("import {container_imports} from '{library}';", &bindings)?;
    doc.render(
        "import type {context_imports} from '{types_module}';",
        &bindings,
    )?;
    doc.blank();

    doc.block(
        render("export interface {interface}")?,
        &[render("// describe the {interface} contract here")?],
        0,
    );
    doc.blank();

    let mut merge = Document::default();
    merge.block(render("interface {list}")?, &[render("{key}: {interface};")?], 0);
    doc.block(render("declare module '{types_module}'")?, &merge.lines, 0);
    doc.blank();

    let mut implementation = Document::default();
    implementation.block(
        render("container.bind('{key}',")?,
        &[render("// provide the {interface} implementation here")?],
        0,
    );
    close_call(&mut implementation);
    doc.block(
        render("export default function {register}(container: {context})")?,
        &implementation.lines,
        0,
    );
    doc.blank();

    let mut mock = Document::default();
    mock.block(
        render("container.bind('{key}',")?,
        &[render("// provide a {interface} mock here")?],
        0,
    );
    close_call(&mut mock);
    doc.block(
        render("export function mock(container: {context})")?,
        &mock.lines,
        0,
    );
    doc.blank();

    doc.render("{register}.mock = mock;", &bindings)?;
    Ok(doc.finish())
}

/// Turn the trailing `}` of a `bind(` block into `});`.
fn close_call(doc: &mut Document) {
    if let Some(last) = doc.lines.last_mut() {
        last.push_str(");");
    }
}
