//! Static behavior and style block appended once per render session.
//!
//! The script binds every `[data-stepper]` and `[data-research]` root on the
//! page, so one copy serves any number of component instances. Activating
//! index `i` shows panel `i`, hides the rest, marks control `i` selected with
//! `tabindex=0` and every other control `tabindex=-1`. Steppers clamp at the
//! ends and drive a progress bar at `i / (n - 1)`; research carousels wrap.

/// Presentational styling for both components.
pub const STYLE: &str = r".stepper{position:relative;margin:1.5rem 0}
.stepper-track{position:relative;display:flex;justify-content:space-between;gap:.5rem;padding-bottom:.75rem}
.stepper-progress{position:absolute;left:0;right:0;bottom:0;height:3px;background:var(--bs-border-color,#dee2e6)}
.stepper-progress-bar{display:block;height:100%;width:0;background:var(--bs-primary,#0d6efd);transition:width .3s ease}
.stepper-step{flex:1 1 0;border:0;background:none;padding:.25rem;text-align:center;cursor:pointer;color:inherit;opacity:.65}
.stepper-step.is-active,.stepper-step:hover,.stepper-step:focus-visible{opacity:1}
.stepper-year{display:block;font-weight:700}
.stepper-label{display:block;font-size:.875em}
.stepper-panel{padding:1rem 0}
.stepper-meta{color:var(--bs-secondary-color,#6c757d);margin-bottom:.5rem}
.stepper-meta span+span::before{content:' \00b7 '}
.research-carousel{margin:1.5rem 0}
.research-indicators{display:flex;flex-wrap:wrap;gap:.5rem;margin-bottom:1rem}
.research-indicator{border:1px solid var(--bs-border-color,#dee2e6);border-radius:999px;background:none;padding:.25rem .75rem;cursor:pointer;color:inherit}
.research-indicator.is-active{background:var(--bs-primary,#0d6efd);border-color:var(--bs-primary,#0d6efd);color:#fff}
.research-highlight{font-style:italic}
.research-figure img{max-width:100%;height:auto}
.research-actions{display:flex;flex-wrap:wrap;gap:.5rem;margin:1rem 0}
.research-nav{display:flex;justify-content:space-between;gap:1rem;margin-top:1rem}
.research-nav button{border:0;background:none;padding:0;cursor:pointer;color:var(--bs-link-color,#0d6efd)}
[hidden]{display:none!important}
";

/// Click and keyboard navigation for both components.
pub const SCRIPT: &str = r#"(function () {
  "use strict";
  function bind(root, controlSel, panelSel, wrap) {
    var controls = Array.prototype.slice.call(root.querySelectorAll(controlSel));
    var panels = Array.prototype.slice.call(root.querySelectorAll(panelSel));
    var bar = root.querySelector(".stepper-progress-bar");
    var count = controls.length;
    if (!count) { return; }
    function activate(i, focus) {
      if (wrap) { i = (i + count) % count; } else { i = Math.max(0, Math.min(count - 1, i)); }
      controls.forEach(function (c, j) {
        var on = j === i;
        c.classList.toggle("is-active", on);
        c.setAttribute("aria-selected", on ? "true" : "false");
        c.setAttribute("tabindex", on ? "0" : "-1");
      });
      panels.forEach(function (p, j) {
        var on = j === i;
        p.classList.toggle("is-active", on);
        p.hidden = !on;
        p.setAttribute("aria-hidden", on ? "false" : "true");
      });
      if (bar) { bar.style.width = (count > 1 ? (i / (count - 1)) * 100 : 0) + "%"; }
      if (focus) { controls[i].focus(); }
      root.setAttribute("data-active-index", String(i));
    }
    function current() { return parseInt(root.getAttribute("data-active-index") || "0", 10); }
    controls.forEach(function (c, j) {
      c.addEventListener("click", function () { activate(j, false); });
      c.addEventListener("keydown", function (e) {
        var target = null;
        if (e.key === "ArrowRight") { target = j + 1; }
        else if (e.key === "ArrowLeft") { target = j - 1; }
        else if (e.key === "Home") { target = 0; }
        else if (e.key === "End") { target = count - 1; }
        if (target === null) { return; }
        e.preventDefault();
        activate(target, true);
      });
    });
    Array.prototype.forEach.call(root.querySelectorAll("[data-nav-index]"), function (b) {
      b.addEventListener("click", function () {
        activate(parseInt(b.getAttribute("data-nav-index"), 10), true);
      });
    });
    activate(current(), false);
  }
  function init() {
    Array.prototype.forEach.call(document.querySelectorAll("[data-stepper]"), function (r) {
      bind(r, ".stepper-step", ".stepper-panel", false);
    });
    Array.prototype.forEach.call(document.querySelectorAll("[data-research]"), function (r) {
      bind(r, ".research-indicator", ".research-card", true);
    });
  }
  if (document.readyState === "loading") {
    document.addEventListener("DOMContentLoaded", init);
  } else {
    init();
  }
})();
"#;

/// The complete block: one `<style>` and one `<script>` element.
#[must_use]
pub fn asset_block() -> String {
    format!("<style data-stepcards>\n{STYLE}</style>\n<script data-stepcards>\n{SCRIPT}</script>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_has_one_style_and_one_script() {
        let block = asset_block();
        assert_eq!(block.matches("<style").count(), 1);
        assert_eq!(block.matches("<script").count(), 1);
        assert!(block.ends_with("</script>"));
    }

    #[test]
    fn test_script_binds_both_components() {
        assert!(SCRIPT.contains("[data-stepper]"));
        assert!(SCRIPT.contains("[data-research]"));
        for key in ["ArrowRight", "ArrowLeft", "Home", "End"] {
            assert!(SCRIPT.contains(key), "missing key handler for {key}");
        }
    }

    #[test]
    fn test_stepper_clamps_and_research_wraps() {
        assert!(SCRIPT.contains(r#"bind(r, ".stepper-step", ".stepper-panel", false)"#));
        assert!(SCRIPT.contains(r#"bind(r, ".research-indicator", ".research-card", true)"#));
        assert!(SCRIPT.contains("if (wrap) { i = (i + count) % count; }"));
        assert!(SCRIPT.contains("Math.max(0, Math.min(count - 1, i))"));
    }
}
