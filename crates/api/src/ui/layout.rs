//! Full page shell around the form and display panels.

use todogen_core::render::escape_html;

use super::controller::PageSession;
use super::display::render_display;
use super::form::{render_form, ACTION_TOGGLE_MOCK, FORM_ID};

const PAGE_TITLE: &str = "Structured Output Demo - Todo Generator";

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 72rem; margin: 0 auto; padding: 2rem; color: #1f2937; }
header { display: flex; flex-direction: column; align-items: center; margin-bottom: 2.5rem; }
main { display: grid; gap: 2.5rem; grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr)); }
.panel { padding: 1.5rem; border: 1px solid #e5e7eb; border-radius: 0.375rem; margin-bottom: 1rem; }
.banner { margin-top: 1rem; padding: 1rem; background: #fef9c3; border: 1px solid #facc15; color: #a16207; border-radius: 0.375rem; }
textarea { width: 100%; padding: 0.75rem; box-sizing: border-box; }
.examples { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 1rem 0; }
button { padding: 0.25rem 0.75rem; border: none; border-radius: 0.25rem; background: #f3f4f6; cursor: pointer; }
button.primary { padding: 0.5rem 1rem; background: #3b82f6; color: #fff; font-weight: bold; }
button:disabled { opacity: 0.5; cursor: not-allowed; }
.todo-item { list-style: none; margin: 0.5rem 0; padding: 0.75rem; border-left: 4px solid #9ca3af; background: #f9fafb; }
.todo-item.priority-high { border-color: #ef4444; }
.todo-item.priority-medium { border-color: #f59e0b; }
.todo-item.priority-low { border-color: #10b981; }
.todo-item.completed h3 { text-decoration: line-through; color: #6b7280; }
.todo-header { display: flex; justify-content: space-between; align-items: center; }
.priority { font-size: 0.75rem; text-transform: uppercase; }
pre.json { background: #f3f4f6; padding: 1rem; overflow: auto; max-height: 15rem; }
.loading { display: flex; align-items: center; justify-content: center; min-height: 300px; }
[hidden] { display: none !important; }
"#;

// Keeps the submit button in sync with the draft and disables the form
// while a submission is in flight.
const SCRIPT: &str = r#"
(function () {
  var form = document.getElementById('prompt-form');
  var prompt = document.getElementById('prompt');
  var submit = document.getElementById('submit');
  var sync = function () { submit.disabled = prompt.value.trim() === ''; };
  prompt.addEventListener('input', sync);
  form.addEventListener('submit', function (event) {
    var trigger = event.submitter;
    if (trigger && trigger.name === 'action' && trigger.value === 'generate') {
      if (prompt.value.trim() === '') { event.preventDefault(); return; }
      document.getElementById('result').hidden = true;
      document.getElementById('loading').hidden = false;
      submit.textContent = 'Generating...';
      setTimeout(function () {
        form.querySelectorAll('button, textarea').forEach(function (el) { el.disabled = true; });
      }, 0);
    }
  });
})();
"#;

/// Render the complete HTML document for `session`.
pub fn render_page(session: &PageSession) -> String {
    let backend = if session.mock_mode {
        "mock data"
    } else {
        "OpenRouter API with GPT-3.5 Turbo"
    };
    let generator_step = if session.mock_mode {
        "mock data generator"
    } else {
        "OpenRouter API with GPT-3.5 Turbo"
    };
    let toggle_label = if session.mock_mode {
        "Switch to API"
    } else {
        "Switch to Mock Data"
    };

    let banner = session
        .banner
        .as_deref()
        .map(|text| format!("\n<div class=\"banner\" role=\"alert\">{}</div>", escape_html(text)))
        .unwrap_or_default();

    let busy = session.is_busy();
    let (result_hidden, loading_hidden) = if busy { (" hidden", "") } else { ("", " hidden") };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{PAGE_TITLE}</title>
<style>{STYLES}</style>
</head>
<body>
<header>
<h1>{PAGE_TITLE}</h1>
<p>Describe a todo list and we'll generate it using {backend} and schema validation.</p>
<button type="submit" form="{FORM_ID}" name="action" value="{ACTION_TOGGLE_MOCK}"{toggle_disabled}>{toggle_label}</button>
</header>
<main>
<div>
{form}{banner}
<div class="panel">
<h2>How It Works</h2>
<ol>
<li>Enter a description of the todo list you want to generate</li>
<li>The prompt is sent to the {generator_step}</li>
<li>The response is validated against the todo list schema</li>
<li>The todo list is rendered in the browser</li>
<li>You can see both the visual output and the structured JSON</li>
</ol>
</div>
</div>
<div>
<div id="loading" class="panel loading"{loading_hidden}><p>Generating Todo List...</p></div>
<div id="result"{result_hidden}>
{display}
</div>
</div>
</main>
<script>{SCRIPT}</script>
</body>
</html>
"#,
        toggle_disabled = if busy { " disabled" } else { "" },
        form = render_form(session),
        display = render_display(session.todo_list.as_ref()),
    )
}
