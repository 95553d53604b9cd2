use log::{error, trace, warn};
use std::collections::VecDeque;
use std::io;
use std::io::ErrorKind::WouldBlock;
use std::net::SocketAddr;
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use tokio::{net::UdpSocket, sync::mpsc};

use crate::responder::Responder;

#[derive(Clone, Debug)]
pub enum Command {
    Shutdown,
}

/// Stops a running `Server`
#[derive(Clone, Debug)]
pub struct ServerHandle {
    commands: mpsc::UnboundedSender<Command>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        if self.commands.send(Command::Shutdown).is_err() {
            trace!("server already stopped");
        }
    }
}

/// Answers every datagram received on a UDP socket
///
/// The server is a future that completes after `ServerHandle::shutdown`, or
/// when every handle has been dropped.
pub struct Server {
    socket: UdpSocket,
    responder: Responder,
    commands: mpsc::UnboundedReceiver<Command>,
    outgoing: VecDeque<(Vec<u8>, SocketAddr)>,
}

impl Server {
    // Will panic if called from outside the context of a runtime
    pub fn new(
        socket: std::net::UdpSocket,
        responder: Responder,
    ) -> io::Result<(Server, ServerHandle)> {
        socket.set_nonblocking(true)?;
        let socket = UdpSocket::from_std(socket)?;

        let (tx, rx) = mpsc::unbounded_channel();

        let server = Server {
            socket,
            responder,
            commands: rx,
            outgoing: VecDeque::new(),
        };

        Ok((server, ServerHandle { commands: tx }))
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    fn recv_packets(&mut self, cx: &mut Context) -> io::Result<()> {
        let mut recv_buf = [0u8; 65536];
        loop {
            let mut buf = tokio::io::ReadBuf::new(&mut recv_buf);
            let addr = match self.socket.poll_recv_from(cx, &mut buf) {
                Poll::Ready(Ok(addr)) => addr,
                Poll::Ready(Err(err)) => return Err(err),
                Poll::Pending => break,
            };
            self.handle_packet(buf.filled(), addr);
        }

        Ok(())
    }

    // A failed recv leaves no read interest registered, so ask to be polled
    // again; otherwise an error such as WSAECONNRESET stalls the server.
    fn recv_error(cx: &mut Context, err: io::Error) {
        error!("ServerRecvPacket Error: {:?}", err);
        cx.waker().wake_by_ref();
    }

    fn handle_packet(&mut self, buffer: &[u8], addr: SocketAddr) {
        if let Some(response) = self.responder.handle_packet(buffer, addr) {
            self.outgoing.push_back((response, addr));
        }
    }
}

impl Future for Server {
    type Output = ();
    fn poll(self: Pin<&mut Self>, cx: &mut Context) -> Poll<()> {
        let pinned = Pin::get_mut(self);
        while let Poll::Ready(cmd) = Pin::new(&mut pinned.commands).poll_recv(cx) {
            match cmd {
                Some(Command::Shutdown) => return Poll::Ready(()),
                None => {
                    warn!("server handle dropped without shutdown");
                    return Poll::Ready(());
                }
            }
        }

        if let Err(err) = pinned.recv_packets(cx) {
            Self::recv_error(cx, err);
        }

        while let Some((response, addr)) = pinned.outgoing.pop_front() {
            trace!("sending packet to {:?}", addr);

            match pinned.socket.poll_send_to(cx, &response, addr) {
                Poll::Ready(Ok(bytes_sent)) if bytes_sent == response.len() => (),
                Poll::Ready(Ok(_)) => warn!("failed to send entire packet"),
                Poll::Ready(Err(ref ioerr)) if ioerr.kind() == WouldBlock => (),
                Poll::Ready(Err(err)) => warn!("error sending packet {:?}", err),
                Poll::Pending => {
                    pinned.outgoing.push_front((response, addr));
                    break;
                }
            }
        }

        Poll::Pending
    }
}
