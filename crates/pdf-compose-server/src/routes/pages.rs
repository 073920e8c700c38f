use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Images to PDF</title></head>
<body>
  <h1>Images to PDF</h1>
  <form action="/convert" method="post" enctype="multipart/form-data">
    <p><input type="file" name="images" accept="image/*" multiple required></p>
    <p>
      <label>Layout
        <select name="layout">
          <option value="single">One image per page</option>
          <option value="double">Two images per page</option>
        </select>
      </label>
    </p>
    <p><label>Border size <input type="number" name="borderSize" min="0" value="3"></label></p>
    <p>
      <label>Border color
        <select name="borderColor">
          <option value="black">Black</option>
          <option value="red">Red</option>
          <option value="blue">Blue</option>
          <option value="green">Green</option>
          <option value="gray">Gray</option>
        </select>
      </label>
    </p>
    <p><button type="submit">Create PDF</button></p>
  </form>
</body>
</html>
"#;

const RESULT_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>PDF ready</title></head>
<body>
  <h1>Your PDF is ready</h1>
  <p><a id="download">Download PDF</a> (the link works once)</p>
  <p><a href="/">Convert more images</a></p>
  <script>
    const file = new URLSearchParams(window.location.search).get("file") || "";
    document.getElementById("download").href = "/download?file=" + encodeURIComponent(file);
  </script>
</body>
</html>
"#;

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /result.html
pub async fn result_handler() -> Html<&'static str> {
    Html(RESULT_HTML)
}
