use axum::response::Html;

const HOME_PAGE: &str = "<h1>Welcome to registro!</h1>";

const REGISTER_PAGE: &str = r#"<!doctype html>
<html>
  <head><title>Register</title></head>
  <body>
    <h1>Register</h1>
    <form method="post" action="/register">
      <label>Username <input name="username" required></label>
      <label>Email <input name="email" type="email" required></label>
      <label>Password <input name="password" type="password" required></label>
      <button type="submit">Register</button>
    </form>
  </body>
</html>
"#;

const LOGIN_PAGE: &str = r#"<!doctype html>
<html>
  <head><title>Login</title></head>
  <body>
    <h1>Login</h1>
    <form method="post" action="/login">
      <label>Username <input name="username" required></label>
      <label>Password <input name="password" type="password" required></label>
      <button type="submit">Login</button>
    </form>
  </body>
</html>
"#;

// axum handler for the greeting page
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

// axum handler for the registration form page
pub async fn register_page() -> Html<&'static str> {
    Html(REGISTER_PAGE)
}

// axum handler for the login form page
pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_PAGE)
}
