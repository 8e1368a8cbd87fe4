use crate::server::api;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

pub fn route_request(method: &str, path: &str, body: &[u8]) -> HttpResponse {
    match (method, path) {
        ("GET", "/") => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/html; charset=utf-8",
            body: index_html(),
        },
        ("GET", "/api/health") => match api::health_payload() {
            Ok(payload) => HttpResponse {
                status_code: 200,
                status_text: "OK",
                content_type: "application/json",
                body: payload,
            },
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("POST", "/api/report") => match api::report_payload(body) {
            Ok(payload) => HttpResponse {
                status_code: 200,
                status_text: "OK",
                content_type: "application/json",
                body: payload,
            },
            Err(err @ api::ReportPayloadError::Serialize(_)) => {
                error_response(500, "Internal Server Error", &err.to_string())
            }
            Err(err) => error_response(400, "Bad Request", &err.to_string()),
        },
        _ => error_response(404, "Not Found", "Route not found"),
    }
}

pub(crate) fn error_response(
    status_code: u16,
    status_text: &'static str,
    message: &str,
) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}

fn index_html() -> String {
    r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Production Report Summary</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 900px; margin: 24px auto; padding: 0 12px; }
    h1 { margin-bottom: 8px; }
    .card { border: 1px solid #ddd; border-radius: 8px; padding: 14px; margin: 14px 0; }
    button { margin-top: 12px; padding: 8px 14px; }
    table { border-collapse: collapse; width: 100%; margin-top: 14px; }
    th, td { border: 1px solid #ccc; padding: 6px 10px; text-align: left; }
    td.num { text-align: right; font-variant-numeric: tabular-nums; }
    tr.total { font-weight: bold; border-top: 3px double #444; background: #f4f4f4; }
    #status { margin-top: 12px; color: #a33; white-space: pre-wrap; }
    #columns { margin-top: 8px; font-size: 0.9rem; color: #666; }
  </style>
</head>
<body>
  <h1>Production Report Summary</h1>
  <p>Upload the daily production report (.xlsm or .xlsx) to generate the well summary.</p>

  <div class="card">
    <strong>Report workbook</strong>
    <div><input id="file" type="file" accept=".xlsx,.xlsm" /></div>
    <div><button id="upload-btn">Generate summary</button></div>
  </div>

  <p id="status"></p>
  <p id="columns"></p>
  <div id="result"></div>

  <script>
    const statusEl = document.getElementById('status');
    const columnsEl = document.getElementById('columns');
    const resultEl = document.getElementById('result');

    function formatCount(value) {
      if (value == null) return '';
      return Math.round(value).toLocaleString('en-US');
    }

    function formatSigned(value) {
      if (value == null) return '';
      const rounded = Math.round(value);
      const text = Math.abs(rounded).toLocaleString('en-US');
      return (rounded < 0 ? '-' : '+') + text;
    }

    function renderRow(record, isTotal) {
      const tr = document.createElement('tr');
      if (isTotal) tr.className = 'total';
      const cells = [
        [record.well_name, false],
        [record.production_zone, false],
        [formatCount(record.total_production), true],
        [formatSigned(record.net_diff), true],
        [record.water_cut, false],
      ];
      for (const [text, numeric] of cells) {
        const td = document.createElement('td');
        if (numeric) td.className = 'num';
        td.textContent = text;
        tr.appendChild(td);
      }
      return tr;
    }

    function renderTable(summary) {
      const table = document.createElement('table');
      const head = document.createElement('tr');
      for (const heading of ['Well Name', 'Production Zone', 'TOTAL PRODUCTION', 'NET DIFF', 'W/C']) {
        const th = document.createElement('th');
        th.textContent = heading;
        head.appendChild(th);
      }
      table.appendChild(head);
      for (const record of summary.wells) table.appendChild(renderRow(record, false));
      table.appendChild(renderRow(summary.total, true));
      resultEl.replaceChildren(table);

      const detected = summary.columns;
      columnsEl.textContent = 'Detected columns — well: ' + detected.well_name
        + ', net diff: ' + detected.net_diff
        + ', total production: ' + (detected.total_production || 'n/a')
        + ', zone: ' + (detected.production_zone || 'n/a')
        + ', w/c: ' + (detected.water_cut || 'n/a');
    }

    document.getElementById('upload-btn').addEventListener('click', async () => {
      const input = document.getElementById('file');
      if (!input.files.length) {
        statusEl.textContent = 'Choose a workbook first.';
        return;
      }
      statusEl.textContent = 'Processing…';
      columnsEl.textContent = '';
      resultEl.replaceChildren();
      try {
        const body = await input.files[0].arrayBuffer();
        const response = await fetch('/api/report', {
          method: 'POST',
          headers: { 'Content-Type': 'application/octet-stream' },
          body,
        });
        const payload = await response.json();
        if (!response.ok) {
          statusEl.textContent = payload.message || ('HTTP ' + response.status);
          return;
        }
        statusEl.textContent = '';
        renderTable(payload);
      } catch (err) {
        statusEl.textContent = 'Upload failed: ' + err;
      }
    });
  </script>
</body>
</html>
"#
    .to_string()
}
