/// Static reply written to every connection, whatever the request was.
pub static RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\n\
Content-Type: text/html\r\n\
Connection: close\r\n\
\r\n\
<html><head><title>Mini Server</title></head><body>\n\
<h1>Hello from Python Mini HTTP Server</h1>\n\
<p>This is a threaded, raw socket HTTP response!</p>\n\
</body></html>\n";
