//! Integration tests for the Telegram transport against a mock Bot API server (mockito).
//!
//! Teloxide request paths are `/bot<token>/<Method>`; paths are matched case-insensitively.

use std::ops::ControlFlow;
use std::sync::Arc;

use async_trait::async_trait;
use command_router::{CommandRouter, CommandService};
use mockito::Matcher;
use serde_json::json;
use webapp_core::{Bot, BotError, Chat, Command, Handler, InboundEvent, Reply};
use teloxide::dptree;
use webapp_telegram::{
    handle_message, publish_commands, update_handler, BotUsername, TelegramBotAdapter,
    TelegramConfig,
};

const TEST_BOT_TOKEN: &str = "test_bot_token_12345";
const WEB_APP_URL: &str = "https://example.com/app";

fn method_path(method: &str) -> Matcher {
    Matcher::Regex(format!(r"(?i)^/bot{}/{}$", TEST_BOT_TOKEN, method))
}

fn sent_message_body(chat_id: i64, text: &str) -> String {
    json!({
        "ok": true,
        "result": {
            "message_id": 100,
            "date": 1_700_000_100,
            "chat": { "id": chat_id, "type": "private", "first_name": "Test" },
            "from": { "id": 1, "is_bot": true, "first_name": "Bot", "username": "webapp_bot" },
            "text": text
        }
    })
    .to_string()
}

fn teloxide_bot(server: &mockito::ServerGuard) -> teloxide::Bot {
    let mut config = TelegramConfig::with_token(TEST_BOT_TOKEN.to_string());
    config.telegram_api_url = Some(server.url());
    config.build_bot().unwrap()
}

fn incoming(chat_id: i64, text: &str) -> teloxide::types::Message {
    serde_json::from_value(json!({
        "message_id": 5,
        "date": 1_700_000_000,
        "chat": { "id": chat_id, "type": "private", "first_name": "Test" },
        "from": { "id": 123, "is_bot": false, "first_name": "Test" },
        "text": text
    }))
    .unwrap()
}

struct OpenHandler;

#[async_trait]
impl Handler for OpenHandler {
    fn description(&self) -> &str {
        "Open the web app"
    }

    async fn handle(&self, _event: &InboundEvent) -> webapp_core::Result<Reply> {
        Ok(Reply::with_web_app(
            "Click the button below to open the web view:",
            "Open Web App",
            url::Url::parse(WEB_APP_URL).unwrap(),
        ))
    }
}

/// **Test: a Web App reply is sent as sendMessage with an inline web_app button.**
#[tokio::test]
async fn test_send_reply_renders_web_app_button() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", method_path("sendMessage"))
        .match_body(Matcher::PartialJson(json!({
            "chat_id": 42,
            "text": "Click the button below to open the web view:",
            "reply_markup": {
                "inline_keyboard": [[
                    { "text": "Open Web App", "web_app": { "url": WEB_APP_URL } }
                ]]
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(sent_message_body(42, "Click the button below to open the web view:"))
        .expect(1)
        .create_async()
        .await;

    let adapter = TelegramBotAdapter::new(teloxide_bot(&server));
    let reply = Reply::with_web_app(
        "Click the button below to open the web view:",
        "Open Web App",
        url::Url::parse(WEB_APP_URL).unwrap(),
    );
    adapter.send_reply(&Chat::private(42), &reply).await.unwrap();

    mock.assert_async().await;
}

/// **Test: a plain reply carries no reply_markup.**
#[tokio::test]
async fn test_send_message_plain_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", method_path("sendMessage"))
        .match_body(Matcher::PartialJson(json!({ "chat_id": 7, "text": "hi" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(sent_message_body(7, "hi"))
        .expect(1)
        .create_async()
        .await;

    let adapter = TelegramBotAdapter::new(teloxide_bot(&server));
    adapter.send_message(&Chat::private(7), "hi").await.unwrap();

    mock.assert_async().await;
}

/// **Test: Bot API errors surface as BotError::Transport.**
#[tokio::test]
async fn test_api_error_maps_to_transport_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", method_path("sendMessage"))
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({ "ok": false, "error_code": 400, "description": "Bad Request: chat not found" })
                .to_string(),
        )
        .create_async()
        .await;

    let adapter = TelegramBotAdapter::new(teloxide_bot(&server));
    let result = adapter.send_message(&Chat::private(1), "hi").await;
    assert!(matches!(result, Err(BotError::Transport(_))));
}

/// **Test: an incoming /open message flows through router and adapter to sendMessage.**
#[tokio::test]
async fn test_handle_message_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", method_path("sendMessage"))
        .match_body(Matcher::PartialJson(json!({ "chat_id": 42 })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(sent_message_body(42, "Click the button below to open the web view:"))
        .expect(1)
        .create_async()
        .await;

    let bot = teloxide_bot(&server);
    let router = Arc::new(CommandRouter::new().register("open", Arc::new(OpenHandler)).unwrap());
    let service = CommandService::new(router, Arc::new(TelegramBotAdapter::new(bot)));

    let reply = handle_message(&service, &incoming(42, "/open"), Some("webapp_bot"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reply.button.unwrap().label, "Open Web App");

    let ignored = handle_message(&service, &incoming(42, "just chatting"), Some("webapp_bot"))
        .await
        .unwrap();
    assert!(ignored.is_none());

    mock.assert_async().await;
}

/// **Test: a reply to a command in a forum topic quotes the command and stays in the topic.**
#[tokio::test]
async fn test_reply_to_quotes_command_in_topic() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", method_path("sendMessage"))
        .match_body(Matcher::PartialJson(json!({
            "chat_id": -1001,
            "message_thread_id": 9,
            "reply_parameters": { "message_id": 5, "allow_sending_without_reply": true },
            "reply_markup": {
                "inline_keyboard": [[
                    { "text": "Open Web App", "web_app": { "url": WEB_APP_URL } }
                ]]
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(sent_message_body(-1001, "Click the button below to open the web view:"))
        .expect(1)
        .create_async()
        .await;

    let adapter = TelegramBotAdapter::new(teloxide_bot(&server));
    let event = InboundEvent::new(Chat::new(-1001, "supergroup"), Command::new("open").unwrap())
        .with_id("5")
        .with_thread_id(9);
    let reply = Reply::with_web_app(
        "Click the button below to open the web view:",
        "Open Web App",
        url::Url::parse(WEB_APP_URL).unwrap(),
    );
    adapter.reply_to(&event, &reply).await.unwrap();

    mock.assert_async().await;
}

/// **Test: a forum-topic /open message is answered in its topic, quoting the command.**
#[tokio::test]
async fn test_handle_message_replies_in_topic() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", method_path("sendMessage"))
        .match_body(Matcher::PartialJson(json!({
            "chat_id": -1001,
            "message_thread_id": 9,
            "reply_parameters": { "message_id": 5 }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(sent_message_body(-1001, "Click the button below to open the web view:"))
        .expect(1)
        .create_async()
        .await;

    let bot = teloxide_bot(&server);
    let router = Arc::new(CommandRouter::new().register("open", Arc::new(OpenHandler)).unwrap());
    let service = CommandService::new(router, Arc::new(TelegramBotAdapter::new(bot)));

    let msg: teloxide::types::Message = serde_json::from_value(json!({
        "message_id": 5,
        "message_thread_id": 9,
        "is_topic_message": true,
        "date": 1_700_000_000,
        "chat": { "id": -1001, "type": "supergroup", "title": "Team", "is_forum": true },
        "from": { "id": 123, "is_bot": false, "first_name": "Test" },
        "text": "/open@webapp_bot"
    }))
    .unwrap();
    let reply = handle_message(&service, &msg, Some("webapp_bot")).await.unwrap();
    assert!(reply.is_some());

    mock.assert_async().await;
}

/// **Test: editing a message into /open runs the command through the update handler.**
#[tokio::test]
async fn test_edited_message_runs_command() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", method_path("sendMessage"))
        .match_body(Matcher::PartialJson(json!({ "chat_id": 42 })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(sent_message_body(42, "Click the button below to open the web view:"))
        .expect(1)
        .create_async()
        .await;

    let bot = teloxide_bot(&server);
    let router = Arc::new(CommandRouter::new().register("open", Arc::new(OpenHandler)).unwrap());
    let service = CommandService::new(router, Arc::new(TelegramBotAdapter::new(bot)));

    let update: teloxide::types::Update = serde_json::from_value(json!({
        "update_id": 1,
        "edited_message": {
            "message_id": 5,
            "date": 1_700_000_000,
            "edit_date": 1_700_000_030,
            "chat": { "id": 42, "type": "private", "first_name": "Test" },
            "from": { "id": 123, "is_bot": false, "first_name": "Test" },
            "text": "/open"
        }
    }))
    .unwrap();

    let result = update_handler()
        .dispatch(dptree::deps![
            update,
            service,
            BotUsername(Some("webapp_bot".to_string()))
        ])
        .await;
    assert!(matches!(result, ControlFlow::Break(Ok(()))));

    mock.assert_async().await;
}

/// **Test: publish_commands sends the sorted command list via setMyCommands.**
#[tokio::test]
async fn test_publish_commands() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", method_path("setMyCommands"))
        .match_body(Matcher::PartialJson(json!({
            "commands": [ { "command": "open", "description": "Open the web app" } ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "ok": true, "result": true }).to_string())
        .expect(1)
        .create_async()
        .await;

    let router = CommandRouter::new().register("open", Arc::new(OpenHandler)).unwrap();
    publish_commands(&teloxide_bot(&server), &router).await.unwrap();

    mock.assert_async().await;
}
