//! Static page shells. The editor itself is client-side JavaScript; the
//! server's only dynamic contribution is the session-data script carrying
//! the record's CID and transport payload into `sessionStorage`.

const INDEX_SHELL: &str = r##"<!DOCTYPE html>
<html lang="en"><head><meta charset="utf-8"/>
    <title>petrilink | petri-net explorer</title>
    <meta name="viewport" content="width=device-width,initial-scale=1"/>
    <meta name="theme-color" content="#000000"/>
    <meta name="description" content="petrilink petri-net editor"/>
    <link rel="icon" href="/p/favicon.ico"/>
    <link rel="manifest" href="/p/manifest.json"/>
    <link href="/p/static/css/main.css" rel="stylesheet">
<!--SESSION-->
    <script defer="defer" src="/p/static/js/main.js"></script>
</head>
<body>
    <noscript>You need to enable JavaScript to run this app.</noscript>
    <div id="root"></div>
</body></html>"##;

const SANDBOX_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <title>petrilink | js sandbox</title>
    <meta charset="utf-8"/>
    <script src="https://cdn.jsdelivr.net/npm/jquery"></script>
    <script src="https://cdn.jsdelivr.net/npm/jquery.terminal/js/jquery.terminal.min.js"></script>
    <link href="https://cdn.jsdelivr.net/npm/jquery.terminal/css/jquery.terminal.min.css" rel="stylesheet"/>
    <script src="https://cdn.jsdelivr.net/npm/ace-builds@1.16.0/src-min-noconflict/ace.min.js"></script>
    <script src="https://cdn.jsdelivr.net/npm/jszip@3.10.1/dist/jszip.min.js"></script>
    <link href="https://cdn.jsdelivr.net/gh/pFlow-dev/pflow-js@v1.0.2/styles/pflow.css" rel="stylesheet"/>
    <script src="https://cdn.jsdelivr.net/gh/pflow-dev/pflow-js@v1.0.2/src/pflow.js"></script>
</head>
<body onload=(runPflowSandbox())>
<canvas id="pflow-canvas" height="600px" width="1116px"></canvas>
<pre id="editor"><!--SOURCE--></pre>
<pre id="term"><a class="pflow-link" target="_blank" href="./">petrilink petri-net editor</a></pre>
</body>
</html>"#;

/// Editor page; `session` carries `(cid, base64_zipped)` for a stored record.
pub fn index_page(session: Option<(&str, &str)>) -> String {
    let script = match session {
        Some((cid, data)) => format!(
            "    <script>\n    sessionStorage.cid = \"{}\";\n    sessionStorage.data = \"{}\";\n    </script>",
            escape_html(cid),
            escape_html(data)
        ),
        None => String::new(),
    };
    INDEX_SHELL.replace("<!--SESSION-->", &script)
}

/// Sandbox page with the declaration source preloaded into the editor pane.
pub fn sandbox_page(source: &str) -> String {
    SANDBOX_SHELL.replace("<!--SOURCE-->", &escape_html(source))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
