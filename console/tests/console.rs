//! Drive every view and a scripted interactive session against the live mock
//! server over real HTTP.

use std::time::Duration;

use customer_console::{views, ApiClient, Block, Session, UreqTransport};
use customer_core::{ApiError, CustomerForm};

fn spawn_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn api(base_url: &str) -> ApiClient<UreqTransport> {
    ApiClient::new(base_url, UreqTransport::new(Duration::from_secs(5)))
}

#[test]
fn views_against_live_server() {
    let api = api(&spawn_server());

    let page = views::home(&api);
    assert!(page.blocks.contains(&Block::Metric {
        label: "Total customers".into(),
        value: "0".into()
    }));
    assert!(page.messages().contains(&"API operational"));

    assert_eq!(views::list(&api).messages(), vec!["No customers registered yet."]);

    let page = views::create(&api, &CustomerForm::new("Ada", "Lovelace", "ada@example.com"));
    assert_eq!(page.messages(), vec!["Customer created"]);

    let page = views::create(&api, &CustomerForm::new("A", "B", "ada@example.com"));
    assert_eq!(page.messages(), vec!["This email is already registered"]);

    let page = views::list(&api);
    assert_eq!(page.messages(), vec!["1 customer(s) found"]);

    let page = views::find(&api, 1);
    assert!(page.blocks.contains(&Block::Metric {
        label: "Email".into(),
        value: "ada@example.com".into()
    }));

    let page = views::delete(&api, 1);
    assert_eq!(page.messages().last(), Some(&"Customer deleted"));

    for _ in 0..2 {
        let page = views::find(&api, 1);
        assert_eq!(page.messages(), vec!["No customer found with this ID."]);
    }

    let page = views::delete(&api, 1);
    assert_eq!(page.messages().last(), Some(&"No customer found with this ID."));
}

#[test]
fn unreachable_server_renders_connection_errors() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let api = api(&format!("http://127.0.0.1:{port}"));

    assert!(matches!(api.list_customers(), Err(ApiError::Connection(_))));

    let page = views::home(&api);
    let messages = page.messages();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].starts_with("API connection error:"));
    assert!(messages[1].starts_with("Error:"));

    let page = views::find(&api, 3);
    assert!(page.messages()[0].starts_with("Connection error:"));
}

#[test]
fn interactive_session_against_live_server() {
    let base_url = spawn_server();
    let api = api(&base_url);
    let script = "\
create
Grace
Hopper
grace@example.com
list

find
1
delete
1
list

q
";
    let mut output = Vec::new();
    Session::new(&api, script.as_bytes(), &mut output)
        .run()
        .unwrap();
    let out = String::from_utf8(output).unwrap();

    assert!(out.contains("[ok] Customer created"));
    assert!(out.contains("[ok] 1 customer(s) found"));
    assert!(out.contains("First name: Grace"));
    assert!(out.contains("[ok] Customer deleted"));
    assert!(out.contains("[info] No customers registered yet."));
    assert!(out.contains(&format!("API: {base_url}")));
}
