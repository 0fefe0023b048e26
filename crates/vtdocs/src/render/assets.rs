//! Stylesheet and script embedded in every page.

use std::fmt::Write;

use crate::theme::Theme;

const LAYOUT_CSS: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; line-height: 1.6; }
[data-theme="light"] body, [data-theme="light"] { background: #ffffff; color: #1f2937; }
[data-theme="dark"] body, [data-theme="dark"] { background: #111827; color: #e5e7eb; }
.site-header { display: flex; align-items: center; gap: 1rem; padding: 0.75rem 1.5rem; border-bottom: 1px solid #d1d5db; }
.site-header .brand { font-weight: 700; margin-right: auto; text-decoration: none; color: inherit; }
.site-header input[type="search"] { width: 18rem; padding: 0.4rem 0.6rem; }
.layout { display: flex; }
.sidebar { width: 15rem; padding: 1rem; border-right: 1px solid #d1d5db; }
.sidebar a { display: block; padding: 0.3rem 0.6rem; border-radius: 4px; color: inherit; text-decoration: none; }
.sidebar a.active { background: #2563eb; color: #ffffff; }
main { flex: 1; padding: 1.5rem 2.5rem; max-width: 60rem; }
.lead { font-size: 1.15rem; opacity: 0.85; }
.callout { border-left: 4px solid; padding: 0.5rem 1rem; margin: 1rem 0; }
.callout-info { border-color: #2563eb; }
.callout-warning { border-color: #d97706; }
.callout-success { border-color: #16a34a; }
.cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); gap: 1rem; }
.card { border: 1px solid #d1d5db; border-radius: 6px; padding: 1rem; }
table { border-collapse: collapse; margin: 1rem 0; }
th, td { border: 1px solid #d1d5db; padding: 0.4rem 0.8rem; text-align: left; }
.code-widget { margin: 1rem 0; border-radius: 6px; overflow: hidden; }
.tab-strip { display: flex; gap: 0.25rem; }
.tab-strip button { border: 0; padding: 0.4rem 0.9rem; cursor: pointer; background: transparent; color: inherit; }
.tab-strip button.active { border-bottom: 2px solid #2563eb; font-weight: 600; }
.code-header { display: flex; justify-content: space-between; padding: 0.4rem 0.8rem; font-size: 0.85rem; }
.code-area { position: relative; margin: 0; }
.code-area pre { margin: 0; padding: 1rem; overflow-x: auto; }
.copy-button.overlay { position: absolute; top: 0.5rem; right: 0.5rem; }
.copy-error { color: #dc2626; font-size: 0.85rem; padding: 0.25rem 0.8rem; }
.method { font-weight: 700; margin-right: 0.5rem; }
.state-operational { color: #16a34a; }
.state-degraded { color: #d97706; }
.state-outage { color: #dc2626; }
.search-results { list-style: none; padding: 0; }
"#;

/// Full stylesheet: layout rules plus token colors for both themes.
#[must_use]
pub fn stylesheet() -> String {
    let mut css = String::from(LAYOUT_CSS);
    for theme in [Theme::Light, Theme::Dark] {
        let scope = format!("[data-theme=\"{theme}\"]");
        let _ = writeln!(css, "{}", theme.palette().css(&scope));
    }
    css
}

/// Client script for tabs, copying and the theme toggle.
///
/// Copying awaits the clipboard before showing the acknowledgment, and each
/// block keeps a single revert timer that a later copy re-arms.
pub const SCRIPT: &str = r##"
(function () {
  const timers = new WeakMap();

  function showCopied(widget, button) {
    const revert = Number(widget.dataset.revertMs || 2000);
    clearTimeout(timers.get(widget));
    button.querySelector(".label").textContent = "Copied!";
    button.dataset.icon = "check";
    timers.set(widget, setTimeout(function () {
      button.querySelector(".label").textContent = "Copy";
      button.dataset.icon = "copy";
      timers.delete(widget);
    }, revert));
  }

  function resetCopied(widget) {
    clearTimeout(timers.get(widget));
    timers.delete(widget);
    const button = widget.querySelector(".copy-button");
    if (button) {
      button.querySelector(".label").textContent = "Copy";
      button.dataset.icon = "copy";
    }
  }

  function activeTab(widget) {
    const tab = widget.querySelector(".tab-strip button.active");
    return tab ? tab.dataset.tab : null;
  }

  document.addEventListener("click", async function (event) {
    const copy = event.target.closest(".copy-button");
    if (copy) {
      const widget = copy.closest(".code-widget");
      const code = widget.querySelector(".code-area pre").textContent;
      const error = widget.querySelector(".copy-error");
      const tabBefore = activeTab(widget);
      try {
        await navigator.clipboard.writeText(code);
        if (activeTab(widget) !== tabBefore) {
          return;
        }
        error.hidden = true;
        showCopied(widget, copy);
      } catch (err) {
        error.textContent = "Copy failed: " + err;
        error.hidden = false;
      }
      return;
    }

    const tab = event.target.closest(".tab-strip button");
    if (tab) {
      const widget = tab.closest(".code-widget");
      if (tab.classList.contains("active")) {
        return;
      }
      const panel = widget.querySelector("template[data-tab=\"" + tab.dataset.tab + "\"]");
      const active = widget.querySelector(".code-area pre");
      const current = widget.querySelector(".tab-strip button.active");
      const stash = document.createElement("template");
      stash.dataset.tab = current.dataset.tab;
      stash.innerHTML = active.outerHTML;
      widget.appendChild(stash);
      active.replaceWith(panel.content.cloneNode(true));
      panel.remove();
      current.classList.remove("active");
      current.setAttribute("aria-selected", "false");
      tab.classList.add("active");
      tab.setAttribute("aria-selected", "true");
      resetCopied(widget);
      widget.querySelector(".copy-error").hidden = true;
      return;
    }

    if (event.target.closest("#theme-toggle")) {
      const root = document.documentElement;
      const next = root.dataset.theme === "dark" ? "light" : "dark";
      root.dataset.theme = next;
      try { localStorage.setItem("vtdocs-theme", next); } catch (_) {}
    }
  });

  try {
    const saved = localStorage.getItem("vtdocs-theme");
    if (saved === "light" || saved === "dark") {
      document.documentElement.dataset.theme = saved;
    }
  } catch (_) {}
})();
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_scopes_both_themes() {
        let css = stylesheet();
        assert!(css.contains("[data-theme=\"light\"] .tok-keyword"));
        assert!(css.contains("[data-theme=\"dark\"] .tok-keyword"));
    }

    #[test]
    fn test_script_confirms_before_acknowledging() {
        let write = SCRIPT.find("await navigator.clipboard.writeText").unwrap();
        let ack = SCRIPT.find("showCopied(widget, copy)").unwrap();
        assert!(write < ack);
        assert!(SCRIPT.contains("clearTimeout(timers.get(widget))"));
    }

    #[test]
    fn test_script_keeps_theme_toggle_handler() {
        assert!(SCRIPT.contains("closest(\"#theme-toggle\")"));
        assert!(SCRIPT.contains("localStorage.setItem(\"vtdocs-theme\", next)"));
        assert!(SCRIPT.trim_end().ends_with("})();"));
    }

    #[test]
    fn test_script_skips_ack_after_tab_switch() {
        let before = SCRIPT.find("const tabBefore = activeTab(widget)").unwrap();
        let write = SCRIPT.find("await navigator.clipboard.writeText").unwrap();
        let check = SCRIPT.find("activeTab(widget) !== tabBefore").unwrap();
        let ack = SCRIPT.find("showCopied(widget, copy)").unwrap();
        assert!(before < write);
        assert!(write < check);
        assert!(check < ack);
    }
}
