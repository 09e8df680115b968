use crate::client::{NewsApi, NewsClient};
use crate::prelude::*;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

pub async fn run_stdio(client: NewsClient) -> Result<()> {
    log::debug!("Starting MCP server with stdio transport...");

    let reader = BufReader::new(tokio::io::stdin());
    serve(reader, tokio::io::stdout(), &client).await
}

/// Answer newline-delimited JSON-RPC messages until `reader` hits EOF.
async fn serve<R, W>(mut reader: R, mut writer: W, api: &dyn NewsApi) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        log::debug!("Received: {trimmed}");

        let Some(response) = super::handle_request(trimmed, api).await else {
            continue;
        };
        let response_json = serde_json::to_string(&response)?;

        log::debug!("Sending: {response_json}");

        writer.write_all(response_json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{articles, FakeApi};

    #[tokio::test]
    async fn test_serve_answers_each_request_line() {
        let api = FakeApi::ok(articles(3));
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"get_top_headlines"}}"#,
            "\n",
        );
        let mut output = Vec::new();

        serve(input.as_bytes(), &mut output, &api).await.unwrap();

        let lines: Vec<serde_json::Value> = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["id"], 1);
        assert_eq!(lines[1]["id"], 2);
        assert_eq!(
            lines[1]["result"]["structuredContent"]["articles"]
                .as_array()
                .unwrap()
                .len(),
            3
        );
        assert_eq!(api.calls(), 1);
    }
}
