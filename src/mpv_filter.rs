//! mpv filter expressions produced by preset transformers.
//!
//! A filter renders to the syntax accepted by mpv's `--vf` option, e.g.
//! `crop=w=640:h=480` or `@sh:lavfi=[unsharp=luma_amount=0.5]`.

use std::fmt;

use serde::{Serialize, Serializer};

/// Body of a filter after its name.
#[derive(Debug, Clone, PartialEq)]
enum FilterBody {
    /// `name=k=v:k=v`, or bare `name` when empty.
    Params(Vec<(String, String)>),
    /// `lavfi=[filter=k=v:k=v]`.
    Lavfi {
        filter: String,
        params: Vec<(String, String)>,
    },
    /// `name=<string>` with the string used verbatim.
    ParamString(String),
    /// Complete filter text supplied by the user.
    Raw(String),
}

/// A single mpv video filter.
#[derive(Debug, Clone, PartialEq)]
pub struct MpvFilter {
    name: String,
    label: Option<String>,
    body: FilterBody,
}

impl MpvFilter {
    /// mpv-native filter with named parameters, rendered in the given order.
    pub fn mpv(name: &str, label: Option<&str>, params: Vec<(String, String)>) -> Self {
        Self {
            name: name.to_string(),
            label: label.map(String::from),
            body: FilterBody::Params(params),
        }
    }

    /// ffmpeg filter wrapped in mpv's `lavfi` bridge.
    pub fn lavfi(name: &str, label: Option<&str>, params: Vec<(String, String)>) -> Self {
        Self {
            name: "lavfi".to_string(),
            label: label.map(String::from),
            body: FilterBody::Lavfi {
                filter: name.to_string(),
                params,
            },
        }
    }

    /// Filter whose parameter text is passed through unchanged.
    pub fn with_param_string(name: &str, label: Option<&str>, param_string: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.map(String::from),
            body: FilterBody::ParamString(param_string.to_string()),
        }
    }

    /// User supplied filter text. Not validated; mpv reports bad syntax.
    pub fn raw(filter: &str) -> Self {
        let name = filter.split('=').next().unwrap_or_default();
        Self {
            name: name.to_string(),
            label: None,
            body: FilterBody::Raw(filter.to_string()),
        }
    }

    /// lavfi `unsharp` applied equally to luma and chroma.
    /// Negative amounts blur.
    pub fn unsharp(amount: f32, msize: i64) -> Self {
        // + 0.0 folds -0.0 to 0.0
        let amount = (amount + 0.0).to_string();
        let msize = msize.to_string();
        let params = [
            ("luma_msize_x", &msize),
            ("luma_msize_y", &msize),
            ("luma_amount", &amount),
            ("chroma_msize_x", &msize),
            ("chroma_msize_y", &msize),
            ("chroma_amount", &amount),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
        Self::lavfi("unsharp", None, params)
    }

    /// Attach an mpv label, replacing any existing one.
    pub fn with_label(mut self, label: Option<&str>) -> Self {
        self.label = label.map(String::from);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Name of the wrapped ffmpeg filter for lavfi filters.
    pub fn lavfi_filter(&self) -> Option<&str> {
        match &self.body {
            FilterBody::Lavfi { filter, .. } => Some(filter.as_str()),
            _ => None,
        }
    }

    /// Named parameters, empty for string-bodied and raw filters.
    pub fn params(&self) -> &[(String, String)] {
        match &self.body {
            FilterBody::Params(params) | FilterBody::Lavfi { params, .. } => params.as_slice(),
            _ => &[],
        }
    }

    /// Look up a named parameter.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_raw(&self) -> bool {
        matches!(self.body, FilterBody::Raw(_))
    }
}

fn format_named(name: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        return name.to_string();
    }
    let args: Vec<String> = params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
    format!("{}={}", name, args.join(":"))
}

impl fmt::Display for MpvFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            write!(f, "@{}:", label)?;
        }
        match &self.body {
            FilterBody::Params(params) => f.write_str(&format_named(&self.name, params)),
            FilterBody::Lavfi { filter, params } => {
                write!(f, "{}=[{}]", self.name, format_named(filter, params))
            }
            FilterBody::ParamString(s) => write!(f, "{}={}", self.name, s),
            FilterBody::Raw(s) => f.write_str(s),
        }
    }
}

impl Serialize for MpvFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_mpv_format() {
        let filter = MpvFilter::mpv("crop", None, pairs(&[("w", "640"), ("h", "480")]));
        assert_eq!(filter.to_string(), "crop=w=640:h=480");
        assert_eq!(filter.param("h"), Some("480"));

        let bare = MpvFilter::mpv("vflip", None, Vec::new());
        assert_eq!(bare.to_string(), "vflip");
    }

    #[test]
    fn test_lavfi_format() {
        let filter = MpvFilter::lavfi("lutrgb", Some("neg"), pairs(&[("r", "negval")]));
        assert_eq!(filter.to_string(), "@neg:lavfi=[lutrgb=r=negval]");
        assert_eq!(filter.name(), "lavfi");
        assert_eq!(filter.lavfi_filter(), Some("lutrgb"));
        assert_eq!(filter.param("r"), Some("negval"));
    }

    #[test]
    fn test_param_string() {
        let filter = MpvFilter::with_param_string("lavfi", None, "[eq=gamma=1.2]");
        assert_eq!(filter.to_string(), "lavfi=[eq=gamma=1.2]");
        assert!(filter.params().is_empty());
    }

    #[test]
    fn test_unsharp() {
        let filter = MpvFilter::unsharp(0.5, 5);
        assert_eq!(
            filter.to_string(),
            "lavfi=[unsharp=luma_msize_x=5:luma_msize_y=5:luma_amount=0.5:\
             chroma_msize_x=5:chroma_msize_y=5:chroma_amount=0.5]"
        );
    }

    #[test]
    fn test_unsharp_negative_zero() {
        assert_eq!(MpvFilter::unsharp(-0.0, 5), MpvFilter::unsharp(0.0, 5));
        assert_eq!(MpvFilter::unsharp(-0.0, 5).param("luma_amount"), Some("0"));
    }

    #[test]
    fn test_raw_passthrough() {
        let filter = MpvFilter::raw("eq=brightness=0.2");
        assert!(filter.is_raw());
        assert_eq!(filter.name(), "eq");
        assert_eq!(filter.to_string(), "eq=brightness=0.2");
        assert_eq!(
            filter.with_label(Some("b")).to_string(),
            "@b:eq=brightness=0.2"
        );
    }

    #[test]
    fn test_serializes_as_string() {
        let filter = MpvFilter::mpv("hflip", None, Vec::new());
        assert_eq!(serde_json::to_string(&filter).unwrap(), "\"hflip\"");
    }
}
