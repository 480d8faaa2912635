//! Font resolution with a guaranteed fallback.
//!
//! Each `FontRole` is given an ordered list of candidate files. The first
//! candidate that exists and parses is bound to the role; if none does, the
//! built-in bitmap face is used instead. Resolution never fails: a missing
//! font only degrades how the text looks.

mod builtin;
mod face;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{FontArc, FontVec};
use serde::Serialize;

use crate::types::FontRole;

pub use builtin::BuiltinFace;
pub use face::{Font, TextExtent};

/// What a role asks for: a size and where to look.
#[derive(Debug, Clone, PartialEq)]
pub struct FontRequest {
    pub role: FontRole,
    pub size: f32,
    pub candidates: Vec<PathBuf>,
}

impl FontRequest {
    pub fn new(role: FontRole, size: f32, candidates: Vec<PathBuf>) -> Self {
        Self {
            role,
            size,
            candidates,
        }
    }
}

/// Where a resolved font came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum FontSource {
    File(PathBuf),
    Builtin,
}

/// A candidate that was passed over, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedCandidate {
    pub path: PathBuf,
    pub reason: String,
}

/// How one role was resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleReport {
    pub role: FontRole,
    pub size: f32,
    pub source: FontSource,
    pub skipped: Vec<SkippedCandidate>,
}

/// Default point size for roles nobody asked for.
pub fn default_size(role: FontRole) -> f32 {
    match role {
        FontRole::Title => 42.0,
        FontRole::Body => 18.0,
        FontRole::Small => 14.0,
        FontRole::Symbol => 36.0,
    }
}

/// Loads candidate files, reading each path at most once.
#[derive(Default)]
pub struct FontResolver {
    loaded: HashMap<PathBuf, Result<FontArc, String>>,
}

impl FontResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every role. Roles without a request get the built-in face.
    pub fn resolve(mut self, requests: &[FontRequest]) -> FontSet {
        let mut bind = |role: FontRole| {
            let request = requests
                .iter()
                .find(|r| r.role == role)
                .cloned()
                .unwrap_or_else(|| FontRequest::new(role, default_size(role), Vec::new()));
            self.resolve_one(&request)
        };

        let title = bind(FontRole::Title);
        let body = bind(FontRole::Body);
        let small = bind(FontRole::Small);
        let symbol = bind(FontRole::Symbol);

        FontSet {
            reports: vec![
                title.1.clone(),
                body.1.clone(),
                small.1.clone(),
                symbol.1.clone(),
            ],
            title: title.0,
            body: body.0,
            small: small.0,
            symbol: symbol.0,
        }
    }

    fn resolve_one(&mut self, request: &FontRequest) -> (Font, RoleReport) {
        let mut skipped = Vec::new();

        for path in &request.candidates {
            match self.load(path) {
                Ok(font) => {
                    let report = RoleReport {
                        role: request.role,
                        size: request.size,
                        source: FontSource::File(path.clone()),
                        skipped,
                    };
                    return (Font::outline(request.role, request.size, path, font), report);
                }
                Err(reason) => skipped.push(SkippedCandidate {
                    path: path.clone(),
                    reason,
                }),
            }
        }

        let report = RoleReport {
            role: request.role,
            size: request.size,
            source: FontSource::Builtin,
            skipped,
        };
        (Font::builtin(request.role, request.size), report)
    }

    fn load(&mut self, path: &Path) -> Result<FontArc, String> {
        self.loaded
            .entry(path.to_path_buf())
            .or_insert_with(|| load_font_file(path))
            .clone()
    }
}

/// Read and parse one font file. The file is closed before returning.
fn load_font_file(path: &Path) -> Result<FontArc, String> {
    if !path.is_file() {
        return Err("not found".to_string());
    }
    let data = fs::read(path).map_err(|e| format!("unreadable: {}", e))?;

    // Collections (.ttc) use their first face.
    FontVec::try_from_vec_and_index(data, 0)
        .map(FontArc::new)
        .map_err(|e| format!("invalid font data: {}", e))
}

/// The fonts bound to each role for one run.
pub struct FontSet {
    title: Font,
    body: Font,
    small: Font,
    symbol: Font,
    reports: Vec<RoleReport>,
}

impl FontSet {
    /// Resolve `requests` with a fresh resolver.
    pub fn resolve(requests: &[FontRequest]) -> Self {
        FontResolver::new().resolve(requests)
    }

    /// A set made only of built-in faces at default sizes.
    pub fn builtin() -> Self {
        Self::resolve(&[])
    }

    pub fn get(&self, role: FontRole) -> &Font {
        match role {
            FontRole::Title => &self.title,
            FontRole::Body => &self.body,
            FontRole::Small => &self.small,
            FontRole::Symbol => &self.symbol,
        }
    }

    /// Per-role resolution details, in `FontRole::ALL` order.
    pub fn reports(&self) -> &[RoleReport] {
        &self.reports
    }

    pub fn uses_builtin(&self) -> bool {
        self.reports.iter().any(|r| r.source == FontSource::Builtin)
    }
}
