// src/core/registry.rs
use crate::core::types::Weight;
use crate::{ChandasError, Result};
use serde::Deserialize;

/// One position of an expected pattern: a literal weight or a free
/// (anceps) position. Gana letters are already expanded away by the time
/// a template holds these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternElement {
    Laghu,
    Guru,
    Any,
}

impl PatternElement {
    pub fn accepts(self, w: Weight) -> bool {
        match self {
            PatternElement::Laghu => w == Weight::Laghu,
            PatternElement::Guru => w == Weight::Guru,
            PatternElement::Any => true,
        }
    }

    /// One concrete weight satisfying this element, for template expansion.
    pub fn concrete(self) -> Weight {
        match self {
            PatternElement::Laghu => Weight::Laghu,
            PatternElement::Guru | PatternElement::Any => Weight::Guru,
        }
    }
}

/// Named three-syllable weight groups used in meter notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gana {
    T,
    J,
    M,
    N,
    Y,
    S,
    B,
}

impl Gana {
    pub fn from_letter(c: char) -> Option<Gana> {
        match c {
            'T' => Some(Gana::T),
            'J' => Some(Gana::J),
            'M' => Some(Gana::M),
            'N' => Some(Gana::N),
            'Y' => Some(Gana::Y),
            'S' => Some(Gana::S),
            'B' => Some(Gana::B),
            _ => None,
        }
    }

    /// Fixed expansion table.
    pub fn triple(self) -> [Weight; 3] {
        use Weight::{Guru as G, Laghu as L};
        match self {
            Gana::T => [G, G, G],
            Gana::J => [L, G, G],
            Gana::M => [G, G, L],
            Gana::N => [G, L, L],
            Gana::Y => [L, G, L],
            Gana::S => [L, L, G],
            Gana::B => [G, L, G],
        }
    }
}

/// A named meter, fully resolved to concrete per-pada patterns at load
/// time. Never re-interpreted while matching.
#[derive(Debug, Clone)]
pub struct MeterTemplate {
    pub name: String,
    pub aliases: Vec<String>,
    pub padas: Vec<Vec<PatternElement>>,
}

impl MeterTemplate {
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|a| a == name)
    }

    /// The expected pattern with every free position pinned to a weight.
    pub fn expand(&self) -> Vec<Vec<Weight>> {
        self.padas
            .iter()
            .map(|pada| pada.iter().map(|e| e.concrete()).collect())
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
    pattern: Option<String>,
    padas: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct Catalog {
    version: u32,
    meters: Vec<CatalogEntry>,
}

const DEFAULT_CATALOG: &str = include_str!("../../data/meters.json");
const PADAS_PER_VERSE: usize = 4;

/// Read-only catalog of meter templates. Built once at startup and shared
/// by reference across verification calls.
#[derive(Debug)]
pub struct MeterRegistry {
    templates: Vec<MeterTemplate>,
}

impl MeterRegistry {
    /// The versioned default catalog shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_json_str(DEFAULT_CATALOG).expect("embedded catalog is valid")
    }

    /// Loads a custom catalog. Entries carry `name`, optional `aliases`,
    /// and either `pattern` (one pada, repeated four times) or `padas`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        tracing::debug!(
            version = catalog.version,
            meters = catalog.meters.len(),
            "loading meter catalog"
        );
        let templates = catalog
            .meters
            .into_iter()
            .map(resolve_entry)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { templates })
    }

    pub fn from_templates(templates: Vec<MeterTemplate>) -> Self {
        Self { templates }
    }

    /// Exact lookup by canonical name or alias.
    pub fn lookup(&self, name: &str) -> Option<&MeterTemplate> {
        self.templates.iter().find(|t| t.answers_to(name))
    }

    pub fn templates(&self) -> &[MeterTemplate] {
        &self.templates
    }
}

fn resolve_entry(entry: CatalogEntry) -> Result<MeterTemplate> {
    let padas = match (&entry.pattern, &entry.padas) {
        (Some(pattern), None) => {
            vec![parse_elements(&entry.name, pattern)?; PADAS_PER_VERSE]
        }
        (None, Some(list)) => list
            .iter()
            .map(|p| parse_elements(&entry.name, p))
            .collect::<Result<Vec<_>>>()?,
        _ => {
            return Err(ChandasError::Catalog {
                name: entry.name,
                reason: "exactly one of 'pattern' or 'padas' is required".to_string(),
            })
        }
    };
    if padas.is_empty() || padas.iter().any(|p| p.is_empty()) {
        return Err(ChandasError::Catalog {
            name: entry.name,
            reason: "template must resolve to non-empty padas".to_string(),
        });
    }
    Ok(MeterTemplate {
        name: entry.name,
        aliases: entry.aliases,
        padas,
    })
}

/// Parses mixed pattern notation: `L`/`G` literals, `.` free positions,
/// and gana letters which expand to their weight triples.
fn parse_elements(name: &str, pattern: &str) -> Result<Vec<PatternElement>> {
    let mut elements = Vec::new();
    for c in pattern.chars() {
        match c {
            'L' => elements.push(PatternElement::Laghu),
            'G' => elements.push(PatternElement::Guru),
            '.' => elements.push(PatternElement::Any),
            c if c.is_whitespace() => {}
            c => match Gana::from_letter(c) {
                Some(gana) => elements.extend(
                    gana.triple().iter().map(|&w| match w {
                        Weight::Laghu => PatternElement::Laghu,
                        Weight::Guru => PatternElement::Guru,
                    }),
                ),
                None => {
                    return Err(ChandasError::Catalog {
                        name: name.to_string(),
                        reason: format!("unrecognized pattern character '{c}'"),
                    })
                }
            },
        }
    }
    Ok(elements)
}
