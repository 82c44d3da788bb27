//! The three showcased languages and the literals attached to each.

use serde::Serialize;

const HTML_SNIPPET: &str = "<h1>Hello, World!</h1>";

const CSS_SNIPPET: &str = r#".css-effect {
  background: linear-gradient(45deg, #ff00ff, #00ffff);
  background-size: 200% 200%;
  animation: gradient 3s ease infinite;
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
  background-clip: text;
  color: transparent;
}

@keyframes gradient {
  0% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
  100% { background-position: 0% 50%; }
}"#;

const JAVASCRIPT_SNIPPET: &str = r#"function typeWriter(element, text, speed = 50) {
  let i = 0;
  const timer = setInterval(() => {
    if (i < text.length) {
      element.textContent += text.charAt(i);
      i++;
    } else {
      clearInterval(timer);
    }
  }, speed);
}

const header = document.querySelector('h1');
typeWriter(header, "Hello, JS!");"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Html,
    Css,
    JavaScript,
}

impl Phase {
    /// Display order, which is also the sequencer's advance order.
    pub const ORDER: [Phase; 3] = [Phase::Html, Phase::Css, Phase::JavaScript];

    pub fn first() -> Self {
        Self::ORDER[0]
    }

    /// `None` once the last phase has been shown.
    pub fn next(self) -> Option<Self> {
        match self {
            Phase::Html => Some(Phase::Css),
            Phase::Css => Some(Phase::JavaScript),
            Phase::JavaScript => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Html => "HTML",
            Phase::Css => "CSS",
            Phase::JavaScript => "JavaScript",
        }
    }

    /// Header text for the phase. The scripted phase reveals its literal
    /// one character at a time instead of showing it outright.
    pub fn header_literal(self) -> &'static str {
        match self {
            Phase::Html => "Hello, World!",
            Phase::Css => "Hello, CSS!",
            Phase::JavaScript => "Hello, JS!",
        }
    }

    pub fn snippet(self) -> &'static str {
        match self {
            Phase::Html => HTML_SNIPPET,
            Phase::Css => CSS_SNIPPET,
            Phase::JavaScript => JAVASCRIPT_SNIPPET,
        }
    }

    pub fn is_scripted(self) -> bool {
        self == Phase::JavaScript
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
