use super::overlay::{FAILURE_MESSAGE, LOADING_MESSAGE};
use crate::Result;
use askama::Template;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

/// Link that opens the page with `text` preloaded.
pub fn page_url(base_url: &str, text: &str) -> String {
    format!(
        "{}/?text={}",
        base_url.trim_end_matches('/'),
        utf8_percent_encode(text, NON_ALPHANUMERIC)
    )
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="ru">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Разбор текста на иврите</title>
    <style>
      body { font-family: system-ui, sans-serif; margin: 0; padding: 1rem; background: #fafafa; }
      #text-display { font-size: 1.6rem; line-height: 2.4rem; }
      .word { position: relative; cursor: pointer; border-radius: 4px; }
      .word:hover, .word:focus { background: #e8f0fe; outline: none; }
      .word.incorrect { color: #c62828; text-decoration: underline wavy #c62828; }
      .tooltip { display: none; position: absolute; bottom: 110%; right: 0; white-space: nowrap;
        font-size: 0.9rem; line-height: 1.2rem; background: #333; color: #fff; padding: 2px 6px; border-radius: 4px; }
      .word.incorrect:hover .tooltip, .word.incorrect:focus .tooltip { display: block; }
      .permalink { font-size: 0.8rem; color: #777; }
      .modal { display: none; position: fixed; inset: 0; background: rgba(0, 0, 0, 0.4); }
      .modal-content { background: #fff; margin: 15% auto; padding: 1rem; width: 85%; max-width: 28rem; border-radius: 8px; }
      .close { float: right; cursor: pointer; font-size: 1.5rem; background: none; border: none; }
      .word-info-item { margin: 0.4rem 0; }
      .word-info-label { font-weight: 600; }
    </style>
  </head>
  <body>
    <main>
      <div id="text-display" dir="rtl">{{ tokens_html|safe }}</div>
      {% match permalink %}{% when Some with (link) %}<p class="permalink"><a href="{{ link }}">Ссылка на этот текст</a></p>{% when None %}{% endmatch %}
    </main>
    <div id="modal" class="modal">
      <div class="modal-content" role="dialog" aria-modal="true">
        <button type="button" class="close" aria-label="Закрыть">&times;</button>
        <h2 id="word-title" dir="rtl"></h2>
        <div id="word-info"></div>
      </div>
    </div>
    <script>
      (function () {
        const modal = document.getElementById('modal');
        const title = document.getElementById('word-title');
        const body = document.getElementById('word-info');
        let latest = 0;

        function message(text) {
          const p = document.createElement('p');
          p.textContent = text;
          body.replaceChildren(p);
        }

        async function showWordDetails(word) {
          const token = ++latest;
          title.textContent = word;
          message('{{ loading_message }}');
          modal.style.display = 'block';
          try {
            const response = await fetch('/panel?word=' + encodeURIComponent(word));
            if (!response.ok) throw new Error('HTTP ' + response.status);
            const markup = await response.text();
            if (token === latest) body.innerHTML = markup;
          } catch (error) {
            console.error('Error fetching word details:', error);
            if (token === latest) message('{{ failure_message }}');
          }
        }

        function dismiss() {
          latest++;
          modal.style.display = 'none';
        }

        document.querySelectorAll('#text-display .word').forEach(function (el) {
          el.addEventListener('click', function () { showWordDetails(el.dataset.word); });
          el.addEventListener('keydown', function (event) {
            if (event.key === 'Enter') showWordDetails(el.dataset.word);
          });
        });
        document.querySelector('.close').addEventListener('click', dismiss);
        window.addEventListener('click', function (event) {
          if (event.target === modal) dismiss();
        });
      })();
    </script>
  </body>
</html>"#,
    ext = "html"
)]
struct PageTemplate {
    tokens_html: String,
    permalink: Option<String>,
    loading_message: &'static str,
    failure_message: &'static str,
}

/// Full page around already rendered word tokens.
pub fn render_page(tokens_html: String, permalink: Option<String>) -> Result<String> {
    let template = PageTemplate {
        tokens_html,
        permalink,
        loading_message: LOADING_MESSAGE,
        failure_message: FAILURE_MESSAGE,
    };
    Ok(template.render()?)
}
